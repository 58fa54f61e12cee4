use crate::model::aesthetic::Aesthetic;
use crate::model::pin::{Aesthetics, Attribution, Pin};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Uploader";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x1000?text=Uploaded";
/// Origin recorded for every user-submitted pin
pub const UPLOAD_ORIGIN: &str = "User Upload";

/// Raw upload form fields, exactly as the user typed them
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub title: String,
    pub image: String,
    /// Comma-separated
    pub tags: String,
    /// `None` when the form offers no category selector
    pub aesthetics: Option<Vec<Aesthetic>>,
    pub author: String,
}

/// A well-formed pin still waiting for its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPin {
    pub title: String,
    pub image: String,
    pub tags: Vec<String>,
    pub aesthetics: Aesthetics,
    pub attribution: Attribution,
}

impl NewPin {
    pub fn into_pin(self, id: String) -> Pin {
        Pin {
            id,
            title: self.title,
            image: self.image,
            tags: self.tags,
            aesthetics: self.aesthetics,
            attribution: self.attribution,
        }
    }
}

/// Map raw form fields to a valid pin payload. Never fails.
pub fn normalize(form: &UploadForm) -> NewPin {
    NewPin {
        title: or_default(&form.title, DEFAULT_TITLE),
        image: or_default(&form.image, PLACEHOLDER_IMAGE),
        tags: split_tags(&form.tags),
        aesthetics: form
            .aesthetics
            .clone()
            .and_then(|v| Aesthetics::try_from(v).ok())
            .unwrap_or_default(),
        attribution: Attribution {
            author: or_default(&form.author, DEFAULT_AUTHOR),
            origin: UPLOAD_ORIGIN.to_string(),
        },
    }
}

/// Split on commas, trim, lowercase, drop empty segments. Order is kept.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_gets_every_default() {
        let form = UploadForm {
            tags: "a, b ,, c".into(),
            ..Default::default()
        };
        let new = normalize(&form);
        assert_eq!(new.title, "Untitled");
        assert_eq!(new.image, PLACEHOLDER_IMAGE);
        assert_eq!(new.tags, vec!["a", "b", "c"]);
        assert_eq!(new.aesthetics, Aesthetics::single(Aesthetic::Cottagecore));
        assert_eq!(new.attribution.author, "Uploader");
        assert_eq!(new.attribution.origin, "User Upload");
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let form = UploadForm {
            title: "   ".into(),
            author: "\t".into(),
            ..Default::default()
        };
        let new = normalize(&form);
        assert_eq!(new.title, "Untitled");
        assert_eq!(new.attribution.author, "Uploader");
    }

    #[test]
    fn supplied_fields_are_kept() {
        let form = UploadForm {
            title: "Market day".into(),
            image: "https://example.com/m.jpg".into(),
            tags: "Market, Fruit".into(),
            aesthetics: Some(vec![Aesthetic::Colombian, Aesthetic::EarthyGoddess]),
            author: "Ana".into(),
        };
        let new = normalize(&form);
        assert_eq!(new.title, "Market day");
        assert_eq!(new.image, "https://example.com/m.jpg");
        assert_eq!(new.tags, vec!["market", "fruit"]);
        assert_eq!(new.aesthetics.joined(), "colombian, earthy-goddess");
        assert_eq!(new.attribution.author, "Ana");
        assert_eq!(new.attribution.origin, "User Upload");
    }

    #[test]
    fn empty_aesthetic_list_falls_back_to_default() {
        let form = UploadForm {
            aesthetics: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(normalize(&form).aesthetics, Aesthetics::default());
    }

    #[test]
    fn empty_tag_field_yields_no_tags() {
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn into_pin_assigns_id() {
        let pin = normalize(&UploadForm::default()).into_pin("p-001".into());
        assert_eq!(pin.id, "p-001");
        assert_eq!(pin.title, "Untitled");
    }
}
