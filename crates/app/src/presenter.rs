//! Hypermedia envelopes wrapped around service results.
//!
//! The `_meta` block (self links, collection stats) is a presentation
//! convention: it is attached on the way out and never accepted back as
//! input, so nothing in it can flow toward the service or the repository.

use serde::Serialize;

use lights_domain::id::LightId;
use lights_domain::light::Light;

/// A hypermedia link.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: &'static str,
}

impl Link {
    fn self_link(href: String) -> Self {
        Self { href, rel: "self" }
    }
}

/// Collection statistics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    pub total_count: usize,
}

/// Presentation metadata attached to a resource or a collection.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

/// A single light plus its self link.
#[derive(Debug, Serialize)]
pub struct LightResource {
    #[serde(flatten)]
    pub light: Light,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// Envelope for a single light: `{"light": {...}}`.
#[derive(Debug, Serialize)]
pub struct LightEnvelope {
    pub light: LightResource,
}

/// Envelope for the whole collection: `{"lights": [...], "_meta": {...}}`.
#[derive(Debug, Serialize)]
pub struct LightCollectionEnvelope {
    pub lights: Vec<LightResource>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// Builds envelopes with canonical URLs rooted at a configured base.
///
/// The base is the API root (e.g. `https://host/api` or just `/api`);
/// trailing slashes are trimmed so hrefs come out in one canonical form.
#[derive(Debug, Clone)]
pub struct LightPresenter {
    base_url: String,
}

impl LightPresenter {
    /// Create a presenter rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Canonical URL of the collection.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}/lights/", self.base_url)
    }

    /// Canonical URL of a single resource. Also the value for the
    /// `Location` header on creation responses.
    #[must_use]
    pub fn resource_url(&self, id: LightId) -> String {
        format!("{}/lights/{id}", self.base_url)
    }

    /// Wrap a single light in its envelope.
    #[must_use]
    pub fn present(&self, light: Light) -> LightEnvelope {
        LightEnvelope {
            light: self.resource(light),
        }
    }

    /// Wrap a collection in its envelope, with per-resource self links and
    /// collection stats.
    #[must_use]
    pub fn present_list(&self, lights: Vec<Light>) -> LightCollectionEnvelope {
        let meta = Meta {
            links: vec![Link::self_link(self.collection_url())],
            stats: Some(Stats {
                total_count: lights.len(),
            }),
        };
        LightCollectionEnvelope {
            lights: lights.into_iter().map(|l| self.resource(l)).collect(),
            meta,
        }
    }

    fn resource(&self, light: Light) -> LightResource {
        let meta = Meta {
            links: vec![Link::self_link(self.resource_url(light.id))],
            stats: None,
        };
        LightResource { light, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lights_domain::time;

    fn light(id: i64, name: &str) -> Light {
        Light {
            id: LightId::from_i64(id),
            name: name.to_string(),
            is_powered_on: false,
            created_at: time::now(),
        }
    }

    #[test]
    fn should_wrap_single_light_with_self_link() {
        let presenter = LightPresenter::new("/api");
        let json = serde_json::to_value(presenter.present(light(1, "Living Room"))).unwrap();

        assert_eq!(json["light"]["id"], 1);
        assert_eq!(json["light"]["name"], "Living Room");
        assert_eq!(json["light"]["is_powered_on"], false);
        assert!(json["light"]["created_at"].is_string());
        assert_eq!(json["light"]["_meta"]["links"][0]["rel"], "self");
        assert_eq!(json["light"]["_meta"]["links"][0]["href"], "/api/lights/1");
    }

    #[test]
    fn should_wrap_collection_with_stats_and_per_resource_links() {
        let presenter = LightPresenter::new("/api");
        let envelope =
            presenter.present_list(vec![light(1, "Living Room"), light(2, "Kitchen")]);
        let json = serde_json::to_value(envelope).unwrap();

        assert_eq!(json["lights"].as_array().unwrap().len(), 2);
        assert_eq!(json["_meta"]["stats"]["total_count"], 2);
        assert_eq!(json["_meta"]["links"][0]["href"], "/api/lights/");
        assert_eq!(json["lights"][1]["_meta"]["links"][0]["href"], "/api/lights/2");
    }

    #[test]
    fn should_report_zero_total_count_for_empty_collection() {
        let presenter = LightPresenter::new("/api");
        let json = serde_json::to_value(presenter.present_list(vec![])).unwrap();

        assert_eq!(json["lights"].as_array().unwrap().len(), 0);
        assert_eq!(json["_meta"]["stats"]["total_count"], 0);
    }

    #[test]
    fn should_omit_stats_on_single_resources() {
        let presenter = LightPresenter::new("/api");
        let json = serde_json::to_value(presenter.present(light(3, "Porch"))).unwrap();

        assert!(json["light"]["_meta"].get("stats").is_none());
    }

    #[test]
    fn should_trim_trailing_slash_from_base() {
        let presenter = LightPresenter::new("http://localhost:3000/api/");
        assert_eq!(
            presenter.resource_url(LightId::from_i64(5)),
            "http://localhost:3000/api/lights/5"
        );
        assert_eq!(
            presenter.collection_url(),
            "http://localhost:3000/api/lights/"
        );
    }
}
