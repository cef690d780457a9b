// Search tool injection

use serde_json::{json, Value};

/// Ensure the request carries exactly one `googleSearch` tool.
///
/// Legacy `googleSearchRetrieval` entries are replaced as well.
pub fn inject_google_search_tool(body: &mut Value) {
    let Some(obj) = body.as_object_mut() else {
        return;
    };

    let tools_entry = obj.entry("tools").or_insert_with(|| json!([]));
    if !tools_entry.is_array() {
        *tools_entry = json!([]);
    }

    if let Some(tools_arr) = tools_entry.as_array_mut() {
        tools_arr.retain(|t| {
            t.as_object().map_or(true, |o| {
                !(o.contains_key("googleSearch") || o.contains_key("googleSearchRetrieval"))
            })
        });
        tools_arr.push(json!({ "googleSearch": {} }));
    }
}
