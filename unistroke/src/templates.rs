use serde_derive::Deserialize;

use super::error::RecognizerError;
use super::normalized_stroke::NormalizedStroke;
use super::{Point, Stroke};

/// A named gesture class, stored in normalized form. A raw stroke never
/// enters the store: `TemplateStore::load` runs the full resample and
/// normalize pipeline first.
pub struct Template {
    pub name: String,
    pub stroke: NormalizedStroke,
}

/// The set of gesture classes the engine recognizes against. Populated
/// during the load phase and read-only afterward; iteration order is
/// insertion order. Duplicate names are allowed and compared separately.
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    pub fn new() -> TemplateStore {
        TemplateStore {
            templates: Vec::new(),
        }
    }

    pub fn load(&mut self, name: &str, raw: &Stroke) -> Result<(), RecognizerError> {
        let normalized = NormalizedStroke::from_stroke(raw)?;
        self.templates.push(Template {
            name: name.to_string(),
            stroke: normalized,
        });
        Ok(())
    }

    pub fn all(&self) -> std::slice::Iter<Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[derive(Deserialize)]
struct GestureDef {
    name: String,
    points: Vec<(f64, f64)>,
}

// The gesture definitions shipped with the engine. The asset is embedded
// in the binary; a parse failure here is a packaging defect.
pub(crate) fn bundled_gestures() -> Vec<(String, Stroke)> {
    let json = include_str!("../data/gestures.json");
    let defs: Vec<GestureDef> = serde_json::from_str(json).expect("Failed to parse gesture data.");
    defs.into_iter()
        .map(|def| {
            let points = def.points.iter().map(|&(x, y)| Point { x: x, y: y }).collect();
            (def.name, Stroke { points: points })
        })
        .collect()
}
