//! Declarative description of one API command
//!
//! The catalog describes every command as a [`CommandSpec`]; the generic
//! [`ApiCommand`](super::ApiCommand) turns a spec into flags, one request and
//! rendered output.

use reqwest::Method;

/// Value type of a flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagKind {
    String,
    Int,
    /// Bare `-flag` means true, `-flag=false` is accepted
    Bool,
    Enum(&'static [&'static str]),
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    Date,
    /// Comma-separated, repeatable
    List,
    /// Terraform state file: fills `state`, `md5`, `serial` and `lineage`
    StateFile,
}

/// Where a flag value ends up in the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagTarget {
    /// `{flag}` placeholder in the path template
    Path,
    /// Query parameter with this key
    Query(&'static str),
    /// JSON:API attribute with this key
    Attribute(&'static str),
    /// JSON:API to-one relationship `{name: {data: {type, id}}}`
    Relationship {
        name: &'static str,
        kind: &'static str,
    },
    /// Only referenced by templates or list bodies
    Local,
}

/// A single command-line flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: FlagKind,
    pub target: FlagTarget,
    pub required: bool,
    pub default: Option<&'static str>,
}

impl FlagSpec {
    fn new(name: &'static str, help: &'static str, target: FlagTarget) -> Self {
        Self {
            name,
            help,
            kind: FlagKind::String,
            target,
            required: false,
            default: None,
        }
    }

    /// Required path placeholder
    pub fn path(name: &'static str, help: &'static str) -> Self {
        Self::new(name, help, FlagTarget::Path).required()
    }

    /// Optional attribute keyed by the flag name
    pub fn attr(name: &'static str, help: &'static str) -> Self {
        Self::new(name, help, FlagTarget::Attribute(name))
    }

    /// Optional attribute with a key that differs from the flag name
    pub fn attr_as(name: &'static str, key: &'static str, help: &'static str) -> Self {
        Self::new(name, help, FlagTarget::Attribute(key))
    }

    /// Optional to-one relationship
    pub fn relationship(
        name: &'static str,
        relationship: &'static str,
        kind: &'static str,
        help: &'static str,
    ) -> Self {
        Self::new(
            name,
            help,
            FlagTarget::Relationship {
                name: relationship,
                kind,
            },
        )
    }

    /// Optional query parameter
    pub fn query(name: &'static str, key: &'static str, help: &'static str) -> Self {
        Self::new(name, help, FlagTarget::Query(key))
    }

    /// Template-only flag
    pub fn local(name: &'static str, help: &'static str) -> Self {
        Self::new(name, help, FlagTarget::Local)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(mut self, kind: FlagKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn boolean(self) -> Self {
        self.kind(FlagKind::Bool)
    }

    pub fn int(self) -> Self {
        self.kind(FlagKind::Int)
    }

    pub fn list(self) -> Self {
        self.kind(FlagKind::List)
    }

    pub fn date(self) -> Self {
        self.kind(FlagKind::Date)
    }

    pub fn one_of(self, values: &'static [&'static str]) -> Self {
        self.kind(FlagKind::Enum(values))
    }

    /// Default value; a flag with a default is never required
    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self.required = false;
        self
    }
}

/// Shape of the request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyShape {
    None,
    /// `{"data": {"type", "attributes", "relationships"}}`
    Resource,
    /// Attributes at the top level, e.g. `{"comment": "..."}`
    Plain,
    /// `{"data": [{"type", "id"}]}` built from a list flag
    IdList { flag: &'static str },
    /// `{"data": [{"type", "attributes": {"name"}}]}` built from a list flag
    NamedList { flag: &'static str },
}

/// Full description of one API command
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Canonical hierarchical name, e.g. `team access create`
    pub name: &'static str,
    pub synopsis: &'static str,
    pub method: Method,
    /// Path template relative to `/api/v2` (or host-absolute when starting with `/api/`)
    pub path: &'static str,
    /// JSON:API type of the body items, may contain `{flag}` placeholders
    pub resource_type: Option<&'static str>,
    pub flags: Vec<FlagSpec>,
    /// Attribute keys rendered as columns, see `output::lookup`
    pub columns: &'static [&'static str],
    pub body: BodyShape,
    /// Adds `-page` and `-page-size`
    pub paged: bool,
    /// Message printed on an empty response
    pub done: Option<&'static str>,
    /// Request `?include=<type>` and render those included resources instead of `data`
    pub included: Option<&'static str>,
}

impl CommandSpec {
    fn new(name: &'static str, synopsis: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            name,
            synopsis,
            method,
            path,
            resource_type: None,
            flags: Vec::new(),
            columns: &[],
            body: BodyShape::None,
            paged: false,
            done: None,
            included: None,
        }
    }

    /// Paged GET returning a collection
    pub fn list(name: &'static str, synopsis: &'static str, path: &'static str) -> Self {
        let mut spec = Self::new(name, synopsis, Method::GET, path);
        spec.paged = true;
        spec
    }

    /// GET returning one resource
    pub fn read(name: &'static str, synopsis: &'static str, path: &'static str) -> Self {
        Self::new(name, synopsis, Method::GET, path)
    }

    /// POST of a JSON:API resource document
    pub fn create(
        name: &'static str,
        synopsis: &'static str,
        path: &'static str,
        resource_type: &'static str,
    ) -> Self {
        Self::new(name, synopsis, Method::POST, path).with_resource(resource_type)
    }

    /// PATCH of a JSON:API resource document
    pub fn update(
        name: &'static str,
        synopsis: &'static str,
        path: &'static str,
        resource_type: &'static str,
    ) -> Self {
        Self::new(name, synopsis, Method::PATCH, path).with_resource(resource_type)
    }

    pub fn delete(name: &'static str, synopsis: &'static str, path: &'static str) -> Self {
        Self::new(name, synopsis, Method::DELETE, path)
    }

    /// POST without a resource document (`/actions/...` endpoints)
    pub fn action(name: &'static str, synopsis: &'static str, path: &'static str) -> Self {
        Self::new(name, synopsis, Method::POST, path)
    }

    fn with_resource(mut self, resource_type: &'static str) -> Self {
        self.resource_type = Some(resource_type);
        self.body = BodyShape::Resource;
        self
    }

    pub fn flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn columns(mut self, columns: &'static [&'static str]) -> Self {
        self.columns = columns;
        self
    }

    /// Attributes sent as a plain top-level object
    pub fn plain_body(mut self) -> Self {
        self.body = BodyShape::Plain;
        self
    }

    /// Body is a list of `{type, id}` taken from a list flag
    pub fn id_list(mut self, flag: &'static str, item_type: &'static str) -> Self {
        self.resource_type = Some(item_type);
        self.body = BodyShape::IdList { flag };
        self
    }

    /// Body is a list of `{type, attributes: {name}}` taken from a list flag
    pub fn named_list(mut self, flag: &'static str, item_type: &'static str) -> Self {
        self.resource_type = Some(item_type);
        self.body = BodyShape::NamedList { flag };
        self
    }

    pub fn done(mut self, message: &'static str) -> Self {
        self.done = Some(message);
        self
    }

    pub fn included(mut self, kind: &'static str) -> Self {
        self.included = Some(kind);
        self
    }

    pub fn find_flag(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|f| f.name == name)
    }
}

/// Names inside `{...}` in a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

/// Substitute `{name}` placeholders; `None` from the lookup leaves the placeholder unresolved
pub fn render_template<F>(template: &str, mut lookup: F) -> std::result::Result<String, String>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(format!("unterminated placeholder in '{}'", template));
        };
        let name = &after[..end];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => return Err(name.to_string()),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("/organizations/{organization}/registry-modules/{registry-name}"),
            vec!["organization", "registry-name"]
        );
        assert!(placeholders("/organizations").is_empty());
    }

    #[test]
    fn test_render_template() {
        let rendered = render_template("/varsets/{id}/relationships/{target}", |name| {
            match name {
                "id" => Some("varset-1".to_string()),
                "target" => Some("projects".to_string()),
                _ => None,
            }
        });
        assert_eq!(rendered.unwrap(), "/varsets/varset-1/relationships/projects");
    }

    #[test]
    fn test_render_template_missing_value() {
        let err = render_template("/teams/{id}", |_| None).unwrap_err();
        assert_eq!(err, "id");
    }

    #[test]
    fn test_default_clears_required() {
        let flag = FlagSpec::path("registry-name", "Registry").default_value("private");
        assert!(!flag.required);
        assert_eq!(flag.default, Some("private"));
    }

    #[test]
    fn test_builders() {
        let spec = CommandSpec::create(
            "team create",
            "Create a team",
            "/organizations/{organization}/teams",
            "teams",
        )
        .flag(FlagSpec::path("organization", "Organization name"))
        .flag(FlagSpec::attr("name", "Team name").required())
        .columns(&["name"]);
        assert_eq!(spec.method, Method::POST);
        assert_eq!(spec.body, BodyShape::Resource);
        assert_eq!(spec.resource_type, Some("teams"));
        assert!(spec.find_flag("name").unwrap().required);
        assert!(spec.find_flag("missing").is_none());
        assert!(!spec.paged);
        assert!(CommandSpec::list("team list", "List teams", "/x").paged);
    }
}
