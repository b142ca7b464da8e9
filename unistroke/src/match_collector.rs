pub struct MatchCollector<'a> {
    max: usize,
    matches: &'a mut Vec<super::Match>,
}

impl<'a> MatchCollector<'a> {
    pub fn new(matches: &mut Vec<super::Match>, max: usize) -> MatchCollector {
        assert!(max > 0, "Expected a positive number for the maximum number of matches.");
        assert!(matches.len() == 0, "The pre-existing matches vector must be empty.");
        MatchCollector {
            max: max,
            matches: matches,
        }
    }

    fn remove_existing_lower(&mut self, mc: &super::Match) -> bool {
        let mut ix: i32 = -1;
        for i in 0..self.matches.len() {
            if self.matches[i].name == mc.name {
                ix = i as i32;
                break;
            }
        }
        // Not there yet: we're good, match doesn't need to be skipped
        if ix == -1 {
            return false;
        }
        // New score is not better: skip new match
        if mc.score <= self.matches[ix as usize].score {
            return true;
        }
        // Remove existing match; don't skip new. Means shifting array left.
        self.matches.remove(ix as usize);
        return false;
    }

    pub fn file_match(&mut self, mc: super::Match) {
        // Already at limit: don't bother if new match's score is smaller than current minimum
        if self.matches.len() == self.max && mc.score <= self.matches.last().unwrap().score {
            return;
        }
        // Remove if we already have this gesture with a lower score
        // If we get "true", we should skip new match (already there with higher score)
        if self.remove_existing_lower(&mc) {
            return;
        }
        // Where does new match go? (Keep array sorted largest score to smallest.)
        // Strictly-smaller lookup means equal scores keep the earlier-filed match first.
        let ix = self.matches.iter().position(|x| x.score < mc.score);
        match ix {
            Some(ix) => self.matches.insert(ix, mc),
            None => self.matches.push(mc),
        }
        // Beyond limit? Drop last item.
        if self.matches.len() > self.max {
            self.matches.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::*;

    fn mk(name: &str, score: f64) -> Match {
        Match {
            name: name.to_string(),
            score: score,
        }
    }

    #[test]
    #[should_panic]
    fn test_new_fail1() {
        let mut matches: Vec<Match> = Vec::new();
        let mut _collector = MatchCollector::new(&mut matches, 0);
    }

    #[test]
    #[should_panic]
    fn test_new_fail2() {
        let mut matches: Vec<Match> = Vec::new();
        matches.push(mk("circle", 1.0));
        let mut _collector = MatchCollector::new(&mut matches, 1);
    }

    #[test]
    fn test_filing() {
        let mut matches: Vec<Match> = Vec::new();
        let mut collector = MatchCollector::new(&mut matches, 3);
        collector.file_match(mk("triangle", 0.8));
        collector.file_match(mk("circle", 0.9));
        collector.file_match(mk("triangle", 0.7));
        collector.file_match(mk("caret", 0.7));
        collector.file_match(mk("star", 1.0));
        assert_eq!(matches, [mk("star", 1.0), mk("circle", 0.9), mk("triangle", 0.8)]);
    }

    #[test]
    fn test_equal_scores_keep_first_filed() {
        let mut matches: Vec<Match> = Vec::new();
        let mut collector = MatchCollector::new(&mut matches, 3);
        collector.file_match(mk("vee", 0.75));
        collector.file_match(mk("check", 0.75));
        assert_eq!(matches, [mk("vee", 0.75), mk("check", 0.75)]);
    }
}
