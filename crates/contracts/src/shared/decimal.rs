//! Los agregados DECIMAL del backend llegan a veces como número JSON y a
//! veces como texto ("4.50"). Este deserializador acepta ambos.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Numero(f64),
    Texto(String),
}

pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Decimal>::deserialize(deserializer)? {
        None => None,
        Some(Decimal::Numero(n)) => Some(n),
        Some(Decimal::Texto(s)) => s.trim().parse().ok(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Fila {
        #[serde(default, deserialize_with = "super::opt_decimal")]
        promedio: Option<f64>,
    }

    #[test]
    fn acepta_numero_texto_y_nulo() {
        let n: Fila = serde_json::from_value(serde_json::json!({ "promedio": 4.5 })).unwrap();
        assert_eq!(n.promedio, Some(4.5));

        let t: Fila = serde_json::from_value(serde_json::json!({ "promedio": "4.50" })).unwrap();
        assert_eq!(t.promedio, Some(4.5));

        let nulo: Fila = serde_json::from_value(serde_json::json!({ "promedio": null })).unwrap();
        assert_eq!(nulo.promedio, None);

        let ausente: Fila = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(ausente.promedio, None);
    }

    #[test]
    fn texto_no_numerico_queda_vacio() {
        let fila: Fila = serde_json::from_value(serde_json::json!({ "promedio": "N/A" })).unwrap();
        assert_eq!(fila.promedio, None);
    }
}
