//! Contact form and the `mailto:` hand-off.
//!
//! The site has no backend. Submitting builds a `mailto:` URI addressed to
//! the configured contact email and lets the visitor's mail client send it.
//! The inputs' own `required`/`type="email"` checks are the only gate; the
//! hand-off takes whatever the form submitted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Element id of the matching input.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Message => "contact-message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn subject(&self) -> String {
        format!("Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn mailto_uri(&self, to: &str) -> String {
        format!(
            "mailto:{to}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let form = ContactForm::new("Sara", "sara@example.com", "Hi there");
        assert_eq!(
            form.mailto_uri("info@effectwaveco.com"),
            "mailto:info@effectwaveco.com?subject=Contact%20from%20Sara\
             &body=Name%3A%20Sara%0AEmail%3A%20sara%40example.com%0A%0AMessage%3A%0AHi%20there"
        );
    }

    #[test]
    fn arabic_text_survives_encoding() {
        let form = ContactForm::new("سارة", "s@example.ly", "مرحبا");
        let uri = form.mailto_uri("info@effectwaveco.com");
        let (_, query) = uri.split_once("?subject=").unwrap();
        let (subject, _) = query.split_once("&body=").unwrap();
        assert_eq!(urlencoding::decode(subject).unwrap(), "Contact from سارة");
        assert!(!uri.contains("سارة"));
    }

    #[test]
    fn whitespace_message_still_hands_off() {
        let form = ContactForm::new("Sara", "sara@example.com", "   ");
        let uri = form.mailto_uri("info@effectwaveco.com");
        assert!(uri.starts_with("mailto:info@effectwaveco.com?subject=Contact%20from%20Sara"));
        assert!(uri.ends_with("Message%3A%0A%20%20%20"));
    }

    #[test]
    fn email_is_passed_through_unchecked() {
        let form = ContactForm::new("A", "sara@", "m");
        assert!(form.mailto_uri("x@y.z").contains("Email%3A%20sara%40%0A"));
    }

    #[test]
    fn input_ids_match_markup() {
        assert_eq!(Field::Email.input_id(), "contact-email");
    }
}
