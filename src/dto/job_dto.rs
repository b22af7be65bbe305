use serde::{Deserialize, Deserializer, Serialize};

/// One element of the `POST /jobs` body. Missing or `null` fields default
/// to an empty name and empty data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewJobRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let jobs: Vec<NewJobRequest> = serde_json::from_str(r#"[{"name":"only name"},{}]"#).unwrap();
        assert_eq!(jobs[0].name, "only name");
        assert!(jobs[0].data.is_empty());
        assert_eq!(jobs[1].name, "");
    }

    #[test]
    fn null_fields_take_defaults() {
        let jobs: Vec<NewJobRequest> =
            serde_json::from_str(r#"[{"name":"x","data":null},{"name":null,"data":[1]}]"#).unwrap();
        assert_eq!(jobs[0].name, "x");
        assert!(jobs[0].data.is_empty());
        assert_eq!(jobs[1].name, "");
        assert_eq!(jobs[1].data, vec![1]);
    }

    #[test]
    fn non_integer_data_is_rejected() {
        let parsed: Result<Vec<NewJobRequest>, _> =
            serde_json::from_str(r#"[{"name":"bad","data":["one"]}]"#);
        assert!(parsed.is_err());
    }
}
