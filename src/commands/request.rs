//! Turn parsed flags into exactly one API request

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::ArgMatches;
use log::debug;
use md5::{Digest, Md5};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

use super::args::{flag_json, flag_list, flag_text, PAGE_FLAG, PAGE_SIZE_FLAG};
use super::spec::{render_template, BodyShape, CommandSpec, FlagKind, FlagTarget};
use crate::error::{Result, TfeError};
use crate::hcp::ApiRequest;

/// Build the request for a spec from parsed flags
pub fn build_request(spec: &CommandSpec, matches: &ArgMatches) -> Result<ApiRequest> {
    let path = render_template(spec.path, |name| {
        let flag = spec.find_flag(name)?;
        flag_text(matches, flag).map(|v| urlencoding::encode(&v).into_owned())
    })
    .map_err(|name| TfeError::Validation(format!("-{} is required", name)))?;

    let mut request = ApiRequest::new(spec.method.clone(), path);
    request.query = query_params(spec, matches);
    request.body = body(spec, matches)?;
    Ok(request)
}

fn query_params(spec: &CommandSpec, matches: &ArgMatches) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = spec
        .flags
        .iter()
        .filter_map(|flag| match flag.target {
            FlagTarget::Query(key) => {
                flag_text(matches, flag).map(|value| (key.to_string(), value))
            }
            _ => None,
        })
        .collect();

    if let Some(kind) = spec.included {
        query.push(("include".to_string(), kind.to_string()));
    }
    if spec.paged {
        if let Some(page) = matches.get_one::<u32>(PAGE_FLAG) {
            query.push(("page[number]".to_string(), page.to_string()));
        }
        if let Some(size) = matches.get_one::<u32>(PAGE_SIZE_FLAG) {
            query.push(("page[size]".to_string(), size.to_string()));
        }
    }
    query
}

fn body(spec: &CommandSpec, matches: &ArgMatches) -> Result<Option<Value>> {
    match spec.body {
        BodyShape::None => Ok(None),
        BodyShape::Plain => {
            let attributes = attributes(spec, matches)?;
            Ok((!attributes.is_empty()).then(|| Value::Object(attributes)))
        }
        BodyShape::Resource => {
            let mut data = Map::new();
            data.insert("type".to_string(), Value::String(item_type(spec, matches)?));
            data.insert(
                "attributes".to_string(),
                Value::Object(attributes(spec, matches)?),
            );
            let relationships = relationships(spec, matches);
            if !relationships.is_empty() {
                data.insert("relationships".to_string(), Value::Object(relationships));
            }
            Ok(Some(json!({ "data": data })))
        }
        BodyShape::IdList { flag } => {
            let kind = item_type(spec, matches)?;
            let items: Vec<Value> = list_values(spec, matches, flag)?
                .into_iter()
                .map(|id| json!({ "type": kind, "id": id }))
                .collect();
            Ok(Some(json!({ "data": items })))
        }
        BodyShape::NamedList { flag } => {
            let kind = item_type(spec, matches)?;
            let items: Vec<Value> = list_values(spec, matches, flag)?
                .into_iter()
                .map(|name| json!({ "type": kind, "attributes": { "name": name } }))
                .collect();
            Ok(Some(json!({ "data": items })))
        }
    }
}

/// JSON:API type, with `{flag}` placeholders filled from flag values
fn item_type(spec: &CommandSpec, matches: &ArgMatches) -> Result<String> {
    let template = spec
        .resource_type
        .ok_or_else(|| TfeError::Config(format!("'{}' has no resource type", spec.name)))?;
    render_template(template, |name| {
        spec.find_flag(name).and_then(|f| flag_text(matches, f))
    })
    .map_err(|name| TfeError::Validation(format!("-{} is required", name)))
}

fn list_values(spec: &CommandSpec, matches: &ArgMatches, flag: &str) -> Result<Vec<String>> {
    let values = spec
        .find_flag(flag)
        .and_then(|f| flag_list(matches, f))
        .unwrap_or_default();
    if values.is_empty() {
        return Err(TfeError::Validation(format!(
            "-{} needs at least one value",
            flag
        )));
    }
    Ok(values)
}

fn attributes(spec: &CommandSpec, matches: &ArgMatches) -> Result<Map<String, Value>> {
    let mut attributes = Map::new();
    for flag in &spec.flags {
        let FlagTarget::Attribute(key) = flag.target else {
            continue;
        };
        if flag.kind == FlagKind::StateFile {
            continue;
        }
        if let Some(value) = flag_json(matches, flag) {
            attributes.insert(key.to_string(), value);
        }
    }

    // State file values only fill what explicit flags left unset
    for flag in spec.flags.iter().filter(|f| f.kind == FlagKind::StateFile) {
        if let Some(path) = matches.get_one::<PathBuf>(flag.name) {
            for (key, value) in state_attributes(path, flag.name)? {
                attributes.entry(key).or_insert(value);
            }
        }
    }
    Ok(attributes)
}

fn relationships(spec: &CommandSpec, matches: &ArgMatches) -> Map<String, Value> {
    spec.flags
        .iter()
        .filter_map(|flag| match flag.target {
            FlagTarget::Relationship { name, kind } => flag_text(matches, flag)
                .map(|id| (name.to_string(), json!({ "data": { "type": kind, "id": id } }))),
            _ => None,
        })
        .collect()
}

/// `state`, `md5`, `serial` and `lineage` attributes for a state file upload
pub fn state_attributes(path: &Path, flag: &str) -> Result<Map<String, Value>> {
    let content = std::fs::read(path).map_err(|e| {
        TfeError::Validation(format!(
            "-{}: could not read {}: {}",
            flag,
            path.display(),
            e
        ))
    })?;
    debug!("Read state file {} ({} bytes)", path.display(), content.len());

    let mut hasher = Md5::new();
    hasher.update(&content);
    let md5_hash = format!("{:x}", hasher.finalize());

    let mut attributes = Map::new();
    attributes.insert("state".to_string(), Value::String(BASE64.encode(&content)));
    attributes.insert("md5".to_string(), Value::String(md5_hash));

    let state: Value = serde_json::from_slice(&content).map_err(|e| {
        TfeError::Validation(format!(
            "-{}: {} is not a Terraform state file: {}",
            flag,
            path.display(),
            e
        ))
    })?;
    if let Some(serial) = state.get("serial").and_then(Value::as_i64) {
        attributes.insert("serial".to_string(), Value::from(serial));
    }
    if let Some(lineage) = state.get("lineage").and_then(Value::as_str) {
        attributes.insert("lineage".to_string(), Value::String(lineage.to_string()));
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::args::{clap_command, is_switch, normalize_args};
    use crate::commands::spec::FlagSpec;
    use reqwest::Method;
    use std::io::Write;

    fn request_for(spec: &CommandSpec, args: &[&str]) -> Result<ApiRequest> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let matches = clap_command(spec)
            .try_get_matches_from(normalize_args(&args, |name| is_switch(spec, name)))
            .unwrap();
        build_request(spec, &matches)
    }

    #[test]
    fn test_resource_body_with_relationship() {
        let spec = CommandSpec::create(
            "workspace create",
            "Create a workspace",
            "/organizations/{organization}/workspaces",
            "workspaces",
        )
        .flag(FlagSpec::path("organization", "Organization name"))
        .flag(FlagSpec::attr("name", "Workspace name").required())
        .flag(FlagSpec::attr("auto-apply", "Apply automatically").boolean())
        .flag(FlagSpec::relationship("project-id", "project", "projects", "Project ID"));

        let request = request_for(
            &spec,
            &["-organization=my org", "-name=prod", "-auto-apply", "-project-id=prj-1"],
        )
        .unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/organizations/my%20org/workspaces");
        assert_eq!(
            request.body.unwrap(),
            json!({
                "data": {
                    "type": "workspaces",
                    "attributes": {"name": "prod", "auto-apply": true},
                    "relationships": {"project": {"data": {"type": "projects", "id": "prj-1"}}}
                }
            })
        );
    }

    #[test]
    fn test_query_and_paging() {
        let spec = CommandSpec::list(
            "team access list",
            "List team access",
            "/team-workspaces",
        )
        .flag(FlagSpec::query("workspace-id", "filter[workspace][id]", "Workspace ID").required());

        let request = request_for(&spec, &["-workspace-id=ws-1", "-page=3", "-page-size=50"]).unwrap();
        assert_eq!(
            request.query,
            vec![
                ("filter[workspace][id]".to_string(), "ws-1".to_string()),
                ("page[number]".to_string(), "3".to_string()),
                ("page[size]".to_string(), "50".to_string()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_id_list_with_templated_type() {
        let spec = CommandSpec::action(
            "variableset apply",
            "Apply a variable set",
            "/varsets/{id}/relationships/{target}",
        )
        .flag(FlagSpec::path("id", "Variable set ID"))
        .flag(FlagSpec::local("target", "Target kind").one_of(&["workspaces", "projects"]).default_value("workspaces"))
        .flag(FlagSpec::local("ids", "Target IDs").list().required())
        .id_list("ids", "{target}");

        let request = request_for(&spec, &["-id=varset-1", "-target=projects", "-ids=prj-1,prj-2"]).unwrap();
        assert_eq!(request.path, "/varsets/varset-1/relationships/projects");
        assert_eq!(
            request.body.unwrap(),
            json!({"data": [{"type": "projects", "id": "prj-1"}, {"type": "projects", "id": "prj-2"}]})
        );
    }

    #[test]
    fn test_named_list() {
        let spec = CommandSpec::action(
            "workspace tag add",
            "Add tags",
            "/workspaces/{id}/relationships/tags",
        )
        .flag(FlagSpec::path("id", "Workspace ID"))
        .flag(FlagSpec::local("tags", "Tag names").list().required())
        .named_list("tags", "tags");

        let request = request_for(&spec, &["-id=ws-1", "-tags=a, b"]).unwrap();
        assert_eq!(
            request.body.unwrap(),
            json!({"data": [
                {"type": "tags", "attributes": {"name": "a"}},
                {"type": "tags", "attributes": {"name": "b"}}
            ]})
        );
    }

    #[test]
    fn test_plain_body_empty_is_none() {
        let spec = CommandSpec::action("run apply", "Apply a run", "/runs/{id}/actions/apply")
            .flag(FlagSpec::path("id", "Run ID"))
            .flag(FlagSpec::attr("comment", "Comment"))
            .plain_body();

        assert!(request_for(&spec, &["-id=run-1"]).unwrap().body.is_none());
        assert_eq!(
            request_for(&spec, &["-id=run-1", "-comment=ship it"]).unwrap().body,
            Some(json!({"comment": "ship it"}))
        );
    }

    #[test]
    fn test_state_file_attributes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let state = r#"{"version":4,"serial":7,"lineage":"abc-123","resources":[]}"#;
        file.write_all(state.as_bytes()).unwrap();

        let spec = CommandSpec::create(
            "stateversion create",
            "Upload a state version",
            "/workspaces/{workspace-id}/state-versions",
            "state-versions",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID"))
        .flag(FlagSpec::attr("serial", "Serial").int())
        .flag(FlagSpec::attr("state-file", "State file").kind(FlagKind::StateFile).required());

        let path = format!("-state-file={}", file.path().display());
        let request = request_for(&spec, &["-workspace-id=ws-1", &path, "-serial=9"]).unwrap();
        let attributes = &request.body.unwrap()["data"]["attributes"];
        assert_eq!(attributes["serial"], json!(9));
        assert_eq!(attributes["lineage"], json!("abc-123"));
        assert_eq!(attributes["state"], json!(BASE64.encode(state)));
        assert_eq!(attributes["md5"].as_str().unwrap().len(), 32);
        assert!(attributes.get("state-file").is_none());
    }

    #[test]
    fn test_state_file_missing_names_flag() {
        let err = state_attributes(Path::new("/nonexistent/terraform.tfstate"), "state-file")
            .unwrap_err();
        assert!(matches!(err, TfeError::Validation(_)));
        assert!(err.to_string().contains("-state-file"));
    }
}
