//! Reusable form validation rules shared by the aggregate DTOs.

/// Declarative constraints for a single form field.
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValidationRules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn with_max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Validate a text field. `label` is used in the error message.
    pub fn validate_string(&self, label: &str, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} es requerido", label));
        }
        if let Some(min) = self.min_length {
            if !trimmed.is_empty() && trimmed.chars().count() < min {
                return Err(format!("{} debe tener al menos {} caracteres", label, min));
            }
        }
        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(format!("{} no puede superar {} caracteres", label, max));
            }
        }
        Ok(())
    }

    /// Validate a numeric field against the configured range.
    pub fn validate_number(&self, label: &str, value: f64) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} debe ser al menos {}", label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} no puede superar {}", label, max));
            }
        }
        Ok(())
    }
}

/// Strip everything that is not an ASCII digit.
pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// CUIT: exactly 11 digits, hyphens and spaces allowed in the input.
pub fn is_valid_cuit(value: &str) -> bool {
    digits(value).len() == 11
}

/// Minimal email shape check: local@domain.tld without spaces.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(' ') {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuit_accepts_eleven_digits_with_hyphens() {
        assert!(is_valid_cuit("20304050607"));
        assert!(is_valid_cuit("20-30405060-7"));
        assert!(is_valid_cuit(" 20-30405060-7 "));
    }

    #[test]
    fn cuit_rejects_wrong_digit_count() {
        assert!(!is_valid_cuit("2030405060"));
        assert!(!is_valid_cuit("203040506071"));
        assert!(!is_valid_cuit(""));
        assert!(!is_valid_cuit("abc"));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("admin@keywarden.com"));
        assert!(is_valid_email("a.b@sub.dominio.ar"));
        assert!(!is_valid_email("sin-arroba"));
        assert!(!is_valid_email("@dominio.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@dominio"));
        assert!(!is_valid_email("user name@dominio.com"));
    }

    #[test]
    fn string_rules() {
        let rules = ValidationRules::required().with_min_length(3);
        assert!(rules.validate_string("Razón social", "ACME SA").is_ok());
        assert_eq!(
            rules.validate_string("Razón social", "  "),
            Err("Razón social es requerido".to_string())
        );
        assert_eq!(
            rules.validate_string("Razón social", "ab"),
            Err("Razón social debe tener al menos 3 caracteres".to_string())
        );
    }

    #[test]
    fn number_rules() {
        let rules = ValidationRules::default().with_range(1.0, 12.0);
        assert!(rules.validate_number("Cuotas", 6.0).is_ok());
        assert!(rules.validate_number("Cuotas", 0.0).is_err());
        assert!(rules.validate_number("Cuotas", 13.0).is_err());
    }
}
