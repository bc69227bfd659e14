//! Form checks run before a dialog submits. They mirror what the remote API
//! enforces so that obvious mistakes are reported without a round trip; the API
//! stays the authority.

use crate::model::establishment::Establishment;
use crate::model::product::Product;
use crate::model::reclamation::Discrepancy;
use regex::Regex;
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const POSTAL_CODE_PATTERN: &str = r"^\d{5}$";
const PHONE_PATTERN: &str = r"^(?:\+33\s?|0)[1-9](?:[\s.-]?\d{2}){4}$";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Le champ « {0} » est obligatoire")]
    Required(&'static str),
    #[error("Adresse e-mail invalide")]
    InvalidEmail,
    #[error("Code postal invalide (5 chiffres attendus)")]
    InvalidPostalCode,
    #[error("Numéro de téléphone invalide")]
    InvalidPhone,
    #[error("Le mot de passe doit contenir au moins 6 caractères")]
    PasswordTooShort,
    #[error("Le prix doit être supérieur à zéro")]
    InvalidPrice,
    #[error("Le taux de TVA doit être compris entre 0 et 100 %")]
    InvalidTaxRate,
    #[error("La capacité doit être supérieure à zéro")]
    InvalidCapacity,
    #[error("La commande doit contenir au moins un produit")]
    EmptyOrder,
    #[error("Indiquez au moins un écart constaté")]
    NoDiscrepancy,
}

fn is_match(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(value))
}

pub fn is_valid_email(value: &str) -> bool {
    is_match(EMAIL_PATTERN, value.trim())
}

pub fn is_valid_postal_code(value: &str) -> bool {
    is_match(POSTAL_CODE_PATTERN, value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    is_match(PHONE_PATTERN, value.trim())
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

fn optional<F>(value: Option<&str>, check: F, error: ValidationError) -> Result<(), ValidationError>
where
    F: Fn(&str) -> bool,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) if !check(v) => Err(error),
        _ => Ok(()),
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    required("E-mail", email)?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    required("Mot de passe", password)
}

/// `password` is `None` when an existing user is edited without a password change.
pub fn validate_user(name: &str, email: &str, password: Option<&str>) -> Result<(), ValidationError> {
    required("Nom", name)?;
    required("E-mail", email)?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if let Some(password) = password {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
    }
    Ok(())
}

pub fn validate_establishment(site: &Establishment) -> Result<(), ValidationError> {
    required("Nom", &site.name)?;
    required("Adresse", site.address.as_deref().unwrap_or_default())?;
    optional(site.postal_code.as_deref(), is_valid_postal_code, ValidationError::InvalidPostalCode)?;
    optional(site.email.as_deref(), is_valid_email, ValidationError::InvalidEmail)?;
    optional(site.phone.as_deref(), is_valid_phone, ValidationError::InvalidPhone)?;
    if site.capacity == Some(0) {
        return Err(ValidationError::InvalidCapacity);
    }
    Ok(())
}

pub fn validate_product(product: &Product) -> Result<(), ValidationError> {
    required("Nom", &product.name)?;
    required("Catégorie", &product.category)?;
    if !(product.unit_price > 0.0) {
        return Err(ValidationError::InvalidPrice);
    }
    if !(0.0..=1.0).contains(&product.tax_rate) {
        return Err(ValidationError::InvalidTaxRate);
    }
    Ok(())
}

pub fn validate_announcement(title: &str, content: &str) -> Result<(), ValidationError> {
    required("Titre", title)?;
    required("Contenu", content)
}

pub fn validate_order_lines(quantities: &[u32]) -> Result<(), ValidationError> {
    if quantities.iter().all(|q| *q == 0) {
        return Err(ValidationError::EmptyOrder);
    }
    Ok(())
}

pub fn validate_reclamation(
    description: &str,
    discrepancies: &[Discrepancy],
) -> Result<(), ValidationError> {
    required("Description", description)?;
    if discrepancies.is_empty() {
        return Err(ValidationError::NoDiscrepancy);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(is_valid_email("chef@fournil.fr"));
        assert!(is_valid_email("  a.b+c@labo.co.uk "));
        assert!(!is_valid_email("chef@fournil"));
        assert!(!is_valid_email("chef fournil@x.fr"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn postal_code_is_five_digits() {
        assert!(is_valid_postal_code("75011"));
        assert!(!is_valid_postal_code("7501"));
        assert!(!is_valid_postal_code("75O11"));
        assert!(!is_valid_postal_code("750111"));
    }

    #[test]
    fn french_phone_numbers() {
        assert!(is_valid_phone("0612345678"));
        assert!(is_valid_phone("06 12 34 56 78"));
        assert!(is_valid_phone("+33 6 12 34 56 78"));
        assert!(!is_valid_phone("12345"));
    }

    #[test]
    fn establishment_optional_fields_are_checked_only_when_present() {
        let mut site = Establishment {
            name: "Fournil du Marais".to_string(),
            address: Some("12 rue des Archives".to_string()),
            ..Establishment::default()
        };
        assert_eq!(validate_establishment(&site), Ok(()));

        site.postal_code = Some("7500".to_string());
        assert_eq!(validate_establishment(&site), Err(ValidationError::InvalidPostalCode));

        site.postal_code = Some("75004".to_string());
        site.capacity = Some(0);
        assert_eq!(validate_establishment(&site), Err(ValidationError::InvalidCapacity));
    }

    #[test]
    fn product_price_and_tax_bounds() {
        let mut product = Product {
            name: "Baguette".to_string(),
            category: "Pains".to_string(),
            unit_price: 1.2,
            tax_rate: 0.055,
            ..Product::default()
        };
        assert_eq!(validate_product(&product), Ok(()));
        product.tax_rate = 5.5;
        assert_eq!(validate_product(&product), Err(ValidationError::InvalidTaxRate));
        product.tax_rate = 0.055;
        product.unit_price = f64::NAN;
        assert_eq!(validate_product(&product), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn user_password_only_checked_when_given() {
        assert_eq!(validate_user("Léa", "lea@x.fr", None), Ok(()));
        assert_eq!(
            validate_user("Léa", "lea@x.fr", Some("abc")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_user(" ", "lea@x.fr", None), Err(ValidationError::Required("Nom")));
    }

    #[test]
    fn order_needs_one_positive_quantity() {
        assert_eq!(validate_order_lines(&[0, 0]), Err(ValidationError::EmptyOrder));
        assert_eq!(validate_order_lines(&[]), Err(ValidationError::EmptyOrder));
        assert_eq!(validate_order_lines(&[0, 4]), Ok(()));
    }
}
