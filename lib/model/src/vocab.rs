//! Vocabulary constants.

/// [XML Schema datatypes](https://www.w3.org/TR/xmlschema11-2/) inferred for native values.
pub mod xsd {
    /// `xsd:boolean`
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:float`
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:int`
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:string`
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}
