//! Qualified name utilities
//!
//! References inside a WSDL (`binding="tns:ShopBinding"`, `type="xsd:string"`)
//! are stored by their local part only. No prefix is ever resolved to a
//! namespace URI.

/// Drop a namespace prefix: everything up to and including the last `:`.
///
/// `None` and the empty string both yield an empty string.
pub fn strip_namespace(qname: Option<&str>) -> String {
    match qname {
        Some(name) => name.rsplit(':').next().unwrap_or_default().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_namespace() {
        assert_eq!(strip_namespace(Some("tns:GetUser")), "GetUser");
        assert_eq!(strip_namespace(Some("GetUser")), "GetUser");
        assert_eq!(strip_namespace(Some("")), "");
        assert_eq!(strip_namespace(None), "");
    }

    #[test]
    fn test_strip_namespace_takes_last_segment() {
        assert_eq!(strip_namespace(Some("a:b:c")), "c");
        assert_eq!(strip_namespace(Some("tns:")), "");
    }
}
