//! Schema descriptors - declarative input contracts for tools.
//!
//! A [`SchemaDescriptor`] describes the object a tool accepts. It serves two
//! purposes: it is rendered as JSON Schema for `tools/list`, and it is
//! interpreted at runtime to default and validate incoming arguments.
//!
//! The vocabulary is deliberately closed: a field is a primitive, a string
//! enum, or an array of another field spec.

use serde_json::{Map, Value, json};

use super::error::ValidationError;

/// Argument bag passed to handlers.
pub type Arguments = Map<String, Value>;

// ============================================================================
// Field Specifications
// ============================================================================

/// JSON primitive types a field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
}

impl PrimitiveType {
    /// JSON Schema name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
        }
    }
}

/// The shape of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A plain JSON primitive.
    Primitive(PrimitiveType),
    /// A string restricted to a fixed, ordered set of values.
    Enum(Vec<String>),
    /// An array whose items all satisfy the inner spec.
    Array(Box<FieldSpec>),
}

/// Specification of one property of a tool's input object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    kind: FieldKind,
    description: String,
    default: Option<Value>,
}

impl FieldSpec {
    /// Create a field spec of the given kind.
    pub fn new(kind: FieldKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            default: None,
        }
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self::new(FieldKind::Primitive(PrimitiveType::String), description)
    }

    pub fn number(description: impl Into<String>) -> Self {
        Self::new(FieldKind::Primitive(PrimitiveType::Number), description)
    }

    pub fn integer(description: impl Into<String>) -> Self {
        Self::new(FieldKind::Primitive(PrimitiveType::Integer), description)
    }

    pub fn boolean(description: impl Into<String>) -> Self {
        Self::new(FieldKind::Primitive(PrimitiveType::Boolean), description)
    }

    /// A string field restricted to `values`.
    pub fn enumeration<I, S>(values: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(FieldKind::Enum(values), description)
    }

    /// An array field whose items satisfy `items`.
    pub fn array(items: FieldSpec, description: impl Into<String>) -> Self {
        Self::new(FieldKind::Array(Box::new(items)), description)
    }

    /// An array of plain strings.
    pub fn string_array(description: impl Into<String>) -> Self {
        Self::array(Self::string(""), description)
    }

    /// Attach a default value, injected when the field is omitted.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Check a single value against this spec. `field` names the value in
    /// error messages.
    pub fn validate(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        match &self.kind {
            FieldKind::Primitive(ty) => {
                if ty.matches(value) {
                    Ok(())
                } else {
                    Err(ValidationError::WrongType {
                        field: field.to_string(),
                        expected: ty.as_str(),
                        actual: json_type_name(value),
                    })
                }
            }
            FieldKind::Enum(allowed) => {
                let Some(s) = value.as_str() else {
                    return Err(ValidationError::WrongType {
                        field: field.to_string(),
                        expected: "string",
                        actual: json_type_name(value),
                    });
                };
                if allowed.iter().any(|a| a == s) {
                    Ok(())
                } else {
                    Err(ValidationError::NotInEnum {
                        field: field.to_string(),
                        value: s.to_string(),
                        allowed: allowed.clone(),
                    })
                }
            }
            FieldKind::Array(items) => {
                let Some(values) = value.as_array() else {
                    return Err(ValidationError::WrongType {
                        field: field.to_string(),
                        expected: "array",
                        actual: json_type_name(value),
                    });
                };
                for (index, item) in values.iter().enumerate() {
                    items
                        .validate(&format!("{}[{}]", field, index), item)
                        .map_err(|source| ValidationError::InvalidItem {
                            field: field.to_string(),
                            index,
                            source: Box::new(source),
                        })?;
                }
                Ok(())
            }
        }
    }

    /// Render this spec as a JSON Schema fragment.
    pub fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();
        match &self.kind {
            FieldKind::Primitive(ty) => {
                schema.insert("type".into(), json!(ty.as_str()));
            }
            FieldKind::Enum(values) => {
                schema.insert("type".into(), json!("string"));
                schema.insert("enum".into(), json!(values));
            }
            FieldKind::Array(items) => {
                schema.insert("type".into(), json!("array"));
                schema.insert("items".into(), items.to_json_schema());
            }
        }
        if !self.description.is_empty() {
            schema.insert("description".into(), json!(self.description));
        }
        if let Some(default) = &self.default {
            schema.insert("default".into(), default.clone());
        }
        Value::Object(schema)
    }
}

// ============================================================================
// Schema Descriptor
// ============================================================================

/// Input contract of a tool: an object with typed properties.
///
/// Properties keep their declaration order, which is also the order in which
/// they are validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDescriptor {
    properties: Vec<(String, FieldSpec)>,
    required: Vec<String>,
}

impl SchemaDescriptor {
    /// An empty object schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an optional property. Redeclaring a name replaces its spec.
    pub fn property(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        let name = name.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = spec,
            None => self.properties.push((name, spec)),
        }
        self
    }

    /// Declare a property and mark it required.
    pub fn required_property(self, name: impl Into<String>, spec: FieldSpec) -> Self {
        let name = name.into();
        self.property(name.clone(), spec).require(name)
    }

    /// Mark an already declared (or later declared) property as required.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.properties.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Look up a property's spec.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Check the descriptor's own invariants.
    ///
    /// Every required name must be declared, and every declared default must
    /// satisfy its field spec.
    pub fn check(&self) -> Result<(), String> {
        if let Some(missing) = self.required.iter().find(|r| self.field(r).is_none()) {
            return Err(format!("required field '{}' is not declared", missing));
        }
        for (name, spec) in &self.properties {
            if let Some(default) = &spec.default {
                spec.validate(name, default)
                    .map_err(|e| format!("default for '{}' is invalid: {}", name, e))?;
            }
        }
        Ok(())
    }

    /// Turn a raw argument value into a defaulted, validated argument bag.
    ///
    /// `null` stands for "no arguments". Explicit `null` properties are
    /// treated as omitted, so they receive defaults like absent ones.
    pub fn prepare(&self, raw: Value) -> Result<Arguments, ValidationError> {
        let mut arguments = match raw {
            Value::Null => Arguments::new(),
            Value::Object(map) => map,
            other => return Err(ValidationError::NotAnObject(json_type_name(&other))),
        };
        arguments.retain(|_, v| !v.is_null());
        self.apply_defaults(&mut arguments);
        self.validate(&arguments)?;
        Ok(arguments)
    }

    /// Inject declared defaults for absent fields.
    pub fn apply_defaults(&self, arguments: &mut Arguments) {
        for (name, spec) in &self.properties {
            if let Some(default) = &spec.default
                && !arguments.contains_key(name)
            {
                arguments.insert(name.clone(), default.clone());
            }
        }
    }

    /// Validate an argument bag. Undeclared properties are accepted as-is.
    pub fn validate(&self, arguments: &Arguments) -> Result<(), ValidationError> {
        for name in &self.required {
            if !arguments.contains_key(name) {
                return Err(ValidationError::MissingField(name.clone()));
            }
        }
        for (name, spec) in &self.properties {
            if let Some(value) = arguments.get(name) {
                spec.validate(name, value)?;
            }
        }
        Ok(())
    }

    /// Render as a JSON Schema object, as advertised in `tools/list`.
    pub fn to_json_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, spec)| (name.clone(), spec.to_json_schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(self.required));
        schema
    }
}

/// Returns a human-readable name for the JSON type of a value.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn research_schema() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .required_property("company_name", FieldSpec::string("Company to research"))
            .property(
                "focus_areas",
                FieldSpec::string_array("Areas to focus on")
                    .with_default(json!(["overview", "recent_news"])),
            )
            .property(
                "depth",
                FieldSpec::enumeration(["basic", "detailed"], "Depth of research")
                    .with_default("detailed"),
            )
            .property("limit", FieldSpec::number("Maximum results").with_default(10))
    }

    #[test]
    fn test_prepare_applies_defaults() {
        let args = research_schema()
            .prepare(json!({ "company_name": "Acme" }))
            .unwrap();
        assert_eq!(args["depth"], "detailed");
        assert_eq!(args["limit"], 10);
        assert_eq!(args["focus_areas"], json!(["overview", "recent_news"]));
    }

    #[test]
    fn test_prepare_keeps_explicit_values() {
        let args = research_schema()
            .prepare(json!({ "company_name": "Acme", "depth": "basic", "limit": 3 }))
            .unwrap();
        assert_eq!(args["depth"], "basic");
        assert_eq!(args["limit"], 3);
    }

    #[test]
    fn test_null_property_counts_as_absent() {
        let args = research_schema()
            .prepare(json!({ "company_name": "Acme", "depth": null }))
            .unwrap();
        assert_eq!(args["depth"], "detailed");
    }

    #[test]
    fn test_missing_required_field() {
        let err = research_schema().prepare(json!({})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("company_name".into()));
    }

    #[test]
    fn test_wrong_primitive_type() {
        let err = research_schema()
            .prepare(json!({ "company_name": 42 }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid type for field 'company_name': expected string, got integer"
        );
    }

    #[test]
    fn test_value_not_in_enum() {
        let err = research_schema()
            .prepare(json!({ "company_name": "Acme", "depth": "exhaustive" }))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotInEnum { ref value, .. } if value == "exhaustive"));
    }

    #[test]
    fn test_array_item_failure() {
        let err = research_schema()
            .prepare(json!({ "company_name": "Acme", "focus_areas": ["news", 7] }))
            .unwrap_err();
        match err {
            ValidationError::InvalidItem { field, index, .. } => {
                assert_eq!(field, "focus_areas");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let err = research_schema().prepare(json!([1, 2])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject("array"));
    }

    #[test]
    fn test_null_arguments_mean_empty() {
        let schema = SchemaDescriptor::new().property("limit", FieldSpec::integer("").with_default(5));
        let args = schema.prepare(Value::Null).unwrap();
        assert_eq!(args["limit"], 5);
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let schema = SchemaDescriptor::new().property("n", FieldSpec::integer("count"));
        assert!(schema.prepare(json!({ "n": 1.5 })).is_err());
        assert!(schema.prepare(json!({ "n": 2 })).is_ok());
    }

    #[test]
    fn test_undeclared_properties_pass_through() {
        let args = research_schema()
            .prepare(json!({ "company_name": "Acme", "extra": true }))
            .unwrap();
        assert_eq!(args["extra"], true);
    }

    #[test]
    fn test_check_rejects_undeclared_required() {
        let schema = SchemaDescriptor::new().require("ghost");
        assert!(schema.check().unwrap_err().contains("ghost"));
    }

    #[test]
    fn test_check_rejects_bad_default() {
        let schema = SchemaDescriptor::new().property(
            "depth",
            FieldSpec::enumeration(["basic"], "").with_default("deep"),
        );
        assert!(schema.check().is_err());
        assert!(research_schema().check().is_ok());
    }

    #[test]
    fn test_json_schema_rendering() {
        let schema = research_schema().to_json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["company_name"]));
        assert_eq!(schema["properties"]["depth"]["enum"], json!(["basic", "detailed"]));
        assert_eq!(schema["properties"]["depth"]["default"], "detailed");
        assert_eq!(schema["properties"]["focus_areas"]["items"], json!({ "type": "string" }));
        assert_eq!(schema["properties"]["limit"]["description"], "Maximum results");
    }

    #[test]
    fn test_json_schema_keeps_declaration_order() {
        let schema = SchemaDescriptor::new()
            .required_property("company_name", FieldSpec::string("Company"))
            .property("job_title", FieldSpec::string("Title"))
            .property("location", FieldSpec::string("Location"))
            .property("limit", FieldSpec::number("Limit"))
            .to_json_schema();
        let keys: Vec<&str> = schema["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["company_name", "job_title", "location", "limit"]);
    }
}
