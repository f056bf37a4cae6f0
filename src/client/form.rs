//! Post-form validation and input composition.
//!
//! This is the validation layer of the error taxonomy: bad input is
//! rejected here with user-facing messages, before anything reaches the
//! repository.

use std::fmt;

use crate::idea::{initials, Category, Founder, IdeaInput};

/// Raw post-form fields, as entered.
#[derive(Debug, Clone)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub looking_for: Vec<String>,
    pub name: String,
    pub tagline: String,
    pub email: String,
}

/// A rejected post form, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingTitle,
    MissingDescription,
    MissingName,
    MissingEmail,
    NoRolesSelected,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::MissingTitle => "Please enter a title for your idea",
            ValidationError::MissingDescription => "Please enter a description for your idea",
            ValidationError::MissingName => "Please enter your name",
            ValidationError::MissingEmail => "Please enter your email",
            ValidationError::NoRolesSelected => {
                "Please select at least one role you're looking for"
            }
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

impl PostForm {
    /// Validate the form and compose the create payload, deriving the
    /// founder's avatar initials from their name.
    pub fn into_input(self) -> Result<IdeaInput, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if self.looking_for.is_empty() {
            return Err(ValidationError::NoRolesSelected);
        }

        let avatar = initials(&self.name);
        Ok(IdeaInput {
            title: self.title,
            description: self.description,
            category: self.category,
            looking_for: self.looking_for,
            founder: Founder {
                name: self.name,
                avatar,
                tagline: self.tagline,
                email: self.email,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PostForm {
        PostForm {
            title: "GreenLedger".into(),
            description: "Carbon tracking for SMBs".into(),
            category: Category::Sustainability,
            looking_for: vec!["Co-Founder".into()],
            name: "Amara Osei".into(),
            tagline: "Ex-consultant turned builder".into(),
            email: "amara@greenledger.io".into(),
        }
    }

    #[test]
    fn valid_form_composes_input_with_initials() {
        let input = form().into_input().unwrap();
        assert_eq!(input.founder.avatar, "AO");
        assert_eq!(input.founder.name, "Amara Osei");
        assert_eq!(input.category, Category::Sustainability);
    }

    #[test]
    fn blank_required_fields_are_rejected_in_form_order() {
        let mut f = form();
        f.title = "   ".into();
        assert_eq!(f.into_input().unwrap_err(), ValidationError::MissingTitle);

        let mut f = form();
        f.description = String::new();
        assert_eq!(
            f.into_input().unwrap_err(),
            ValidationError::MissingDescription
        );

        let mut f = form();
        f.name = String::new();
        assert_eq!(f.into_input().unwrap_err(), ValidationError::MissingName);

        let mut f = form();
        f.email = String::new();
        assert_eq!(f.into_input().unwrap_err(), ValidationError::MissingEmail);

        let mut f = form();
        f.looking_for.clear();
        assert_eq!(f.into_input().unwrap_err(), ValidationError::NoRolesSelected);
    }

    #[test]
    fn tagline_is_optional() {
        let mut f = form();
        f.tagline = String::new();
        assert!(f.into_input().is_ok());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::NoRolesSelected.to_string(),
            "Please select at least one role you're looking for"
        );
    }
}
