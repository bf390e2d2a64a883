use chrono::NaiveDate;

use crate::domain::{errors::ValidationError, models::Message, value_objects::ObjectKey};

/// Format of report object names, e.g. `2021_11_28.html`.
pub const REPORT_NAME_FORMAT: &str = "%Y_%m_%d";

const MESSAGE_PLACEHOLDER: &str = "{{{ message }}}";

/// Page every daily report is rendered into.
pub const REPORT_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html>
    <head>
        <meta charset="UTF-8">
        <title>Message</title>
    </head>
    <body>
        {{{ message }}}
    </body>
</html>
"#;

/// Render the report page for `message`.
///
/// The message is inserted as raw markup; a missing message leaves the body
/// empty.
pub fn render_report(message: Option<&Message>) -> String {
    let body = message.map(|m| m.text.as_str()).unwrap_or_default();
    REPORT_TEMPLATE.replace(MESSAGE_PLACEHOLDER, body)
}

/// Object name of the report for `date` with the given extension (".html")
pub fn report_object_key(date: NaiveDate, extension: &str) -> Result<ObjectKey, ValidationError> {
    ObjectKey::new(format!("{}{}", date.format(REPORT_NAME_FORMAT), extension))
}
