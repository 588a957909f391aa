use crate::config::ServiceConfig;
use crate::error::SynsetError;
use crate::wnid::Wnid;
use url::Url;

const WNID_PLACEHOLDER: &str = "{wnid}";
const FULL_PLACEHOLDER: &str = "{full}";

#[derive(Clone, Debug)]
struct Template {
    template: String,
    needs_full: bool,
}

impl Template {
    fn new(template: &str, needs_full: bool) -> Result<Self, SynsetError> {
        let invalid = |reason: &str| SynsetError::EndpointTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        if !template.contains(WNID_PLACEHOLDER) {
            return Err(invalid("missing {wnid} placeholder"));
        }
        if needs_full && !template.contains(FULL_PLACEHOLDER) {
            return Err(invalid("missing {full} placeholder"));
        }

        let template = Self {
            template: template.to_string(),
            needs_full,
        };
        // Any well-formed id has the same shape, so one sample render covers them all.
        let sample = Wnid::parse("n00000000")?;
        template
            .render(&sample, false)
            .map_err(|e| invalid(&e.to_string()))?;
        Ok(template)
    }

    fn render(&self, wnid: &Wnid, full: bool) -> Result<Url, url::ParseError> {
        let mut rendered = self.template.replace(WNID_PLACEHOLDER, wnid.as_str());
        if self.needs_full {
            rendered = rendered.replace(FULL_PLACEHOLDER, if full { "1" } else { "0" });
        }
        Url::parse(&rendered)
    }
}

/// The three read endpoints of the taxonomy service.
#[derive(Clone, Debug)]
pub struct ServiceEndpoints {
    children: Template,
    labels: Template,
    url_list: Template,
}

impl ServiceEndpoints {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, SynsetError> {
        Ok(Self {
            children: Template::new(&config.children_url, true)?,
            labels: Template::new(&config.labels_url, false)?,
            url_list: Template::new(&config.url_list_url, false)?,
        })
    }

    pub fn children(&self, wnid: &Wnid, recursive: bool) -> Result<Url, SynsetError> {
        Ok(self.children.render(wnid, recursive)?)
    }

    pub fn labels(&self, wnid: &Wnid) -> Result<Url, SynsetError> {
        Ok(self.labels.render(wnid, false)?)
    }

    pub fn url_list(&self, wnid: &Wnid) -> Result<Url, SynsetError> {
        Ok(self.url_list.render(wnid, false)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wnid() -> Wnid {
        Wnid::parse("n01440764").unwrap()
    }

    #[test]
    fn test_default_endpoints_render() {
        let endpoints = ServiceEndpoints::from_config(&ServiceConfig::default()).unwrap();

        assert_eq!(
            endpoints.children(&wnid(), true).unwrap().as_str(),
            "http://www.image-net.org/api/text/wordnet.structure.hyponym?wnid=n01440764&full=1"
        );
        assert_eq!(
            endpoints.children(&wnid(), false).unwrap().as_str(),
            "http://www.image-net.org/api/text/wordnet.structure.hyponym?wnid=n01440764&full=0"
        );
        assert_eq!(
            endpoints.labels(&wnid()).unwrap().as_str(),
            "http://www.image-net.org/api/text/wordnet.synset.getwords?wnid=n01440764"
        );
        assert_eq!(
            endpoints.url_list(&wnid()).unwrap().as_str(),
            "http://www.image-net.org/api/text/imagenet.synset.geturls.getmapping?wnid=n01440764"
        );
    }

    #[test]
    fn test_wnid_may_appear_in_path() {
        let config = ServiceConfig {
            labels_url: "http://127.0.0.1:9000/labels/{wnid}.txt".to_string(),
            ..ServiceConfig::default()
        };
        let endpoints = ServiceEndpoints::from_config(&config).unwrap();

        assert_eq!(
            endpoints.labels(&wnid()).unwrap().as_str(),
            "http://127.0.0.1:9000/labels/n01440764.txt"
        );
    }

    #[test]
    fn test_template_without_wnid_is_rejected() {
        let config = ServiceConfig {
            url_list_url: "http://127.0.0.1:9000/mapping".to_string(),
            ..ServiceConfig::default()
        };

        assert!(matches!(
            ServiceEndpoints::from_config(&config),
            Err(SynsetError::EndpointTemplate { .. })
        ));
    }

    #[test]
    fn test_children_template_without_full_is_rejected() {
        let config = ServiceConfig {
            children_url: "http://127.0.0.1:9000/children?wnid={wnid}".to_string(),
            ..ServiceConfig::default()
        };

        assert!(matches!(
            ServiceEndpoints::from_config(&config),
            Err(SynsetError::EndpointTemplate { .. })
        ));
    }

    #[test]
    fn test_unparseable_template_is_rejected() {
        let config = ServiceConfig {
            labels_url: "not a url {wnid}".to_string(),
            ..ServiceConfig::default()
        };

        assert!(matches!(
            ServiceEndpoints::from_config(&config),
            Err(SynsetError::EndpointTemplate { .. })
        ));
    }
}
