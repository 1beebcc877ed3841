use serde::{Deserialize, Deserializer};

/// Удалённый API отдаёт идентификаторы то строкой, то числом.
/// Приводим оба варианта к строке.
pub fn deserialize_remote_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_remote_id")]
        id: String,
    }

    #[test]
    fn test_accepts_string_and_number_ids() {
        let a: Wrapper = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        let b: Wrapper = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(a.id, "7");
        assert_eq!(b.id, "7");
    }

    #[test]
    fn test_rejects_other_shapes() {
        let r: Result<Wrapper, _> = serde_json::from_str(r#"{"id":[1]}"#);
        assert!(r.is_err());
    }
}
