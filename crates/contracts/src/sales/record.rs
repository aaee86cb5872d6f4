use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One transaction as returned by the sales API.
///
/// Field names follow the remote JSON schema verbatim (the API speaks
/// Portuguese); the purchase date travels as a `DD/MM/YYYY` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Produto")]
    pub product: String,

    #[serde(rename = "Categoria do Produto")]
    pub category: String,

    #[serde(rename = "Preço")]
    pub price: f64,

    #[serde(rename = "Frete")]
    pub freight: f64,

    #[serde(rename = "Data da Compra", with = "purchase_date")]
    pub purchase_date: NaiveDate,

    #[serde(rename = "Vendedor")]
    pub seller: String,

    #[serde(rename = "Local da compra")]
    pub state: String,

    #[serde(rename = "Avaliação da compra")]
    pub rating: u8,

    #[serde(rename = "Tipo de pagamento")]
    pub payment_type: String,

    #[serde(rename = "Quantidade de parcelas")]
    pub installments: u32,

    pub lat: f64,
    pub lon: f64,
}

/// Serde adapter for the API's `DD/MM/YYYY` purchase-date strings.
pub mod purchase_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Produto": "Corda de pular",
        "Categoria do Produto": "esporte e lazer",
        "Preço": 42.79,
        "Frete": 6.08,
        "Data da Compra": "01/01/2020",
        "Vendedor": "Thiago Silva",
        "Local da compra": "BA",
        "Avaliação da compra": 4,
        "Tipo de pagamento": "cartao_credito",
        "Quantidade de parcelas": 2,
        "lat": -13.29,
        "lon": -41.71
    }"#;

    #[test]
    fn parses_api_payload() {
        let record: SalesRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(record.product, "Corda de pular");
        assert_eq!(record.category, "esporte e lazer");
        assert_eq!(record.price, 42.79);
        assert_eq!(record.seller, "Thiago Silva");
        assert_eq!(record.state, "BA");
        assert_eq!(
            record.purchase_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn date_round_trips_in_api_format() {
        let record: SalesRecord = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Data da Compra"], "01/01/2020");
        let back: SalesRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn rejects_iso_dates() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["Data da Compra"] = serde_json::json!("2020-01-01");
        assert!(serde_json::from_value::<SalesRecord>(value).is_err());
    }
}
