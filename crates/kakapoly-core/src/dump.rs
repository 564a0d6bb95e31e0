use serde::{Deserialize, Serialize};

/// Envelope of a fixture file: `{ "docs": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dump<T> {
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
}

impl<T> Dump<T> {
    pub fn new(docs: Vec<T>) -> Self {
        Self { docs }
    }
}

impl<T> Default for Dump<T> {
    fn default() -> Self {
        Self { docs: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;

    #[test]
    fn test_dump_envelope_shape() {
        let icon = Icon::with_id("i1", "a.svg", "s1", "<svg>A</svg>");
        let json = serde_json::to_value(Dump::new(vec![icon])).unwrap();

        assert_eq!(json["docs"][0]["id"], "i1");
        assert_eq!(json["docs"][0]["iconSet"], "s1");
    }

    #[test]
    fn test_dump_missing_docs_is_empty() {
        let dump: Dump<Icon> = serde_json::from_str("{}").unwrap();
        assert!(dump.docs.is_empty());
    }
}
