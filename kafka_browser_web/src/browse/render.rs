use crate::browse::BrowseResult;
use anyhow::Context;
use std::fmt::Write;

pub fn render_page(result: &BrowseResult) -> Result<String, anyhow::Error> {
    let dump =
        serde_json::to_string_pretty(result).context("While serializing browse result")?;

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n<title>Kafka topic browser</title>\n");
    page.push_str("</head>\n<body>\n");

    page.push_str("<form method=\"get\" action=\"/\">\n");
    writeln!(
        page,
        "<label>brokers: <input name=\"brokers\" value=\"{}\"></label>",
        escape_html(result.brokers.as_deref().unwrap_or(""))
    )?;

    page.push_str("<fieldset>\n");
    for topic in &result.available_topics {
        let checked = if result.topic.as_deref() == Some(topic.as_str()) {
            " checked"
        } else {
            ""
        };
        writeln!(
            page,
            "<label><input type=\"radio\" name=\"topic\" value=\"{0}\"{1}> {0}</label><br>",
            escape_html(topic),
            checked
        )?;
    }
    page.push_str("</fieldset>\n");
    page.push_str("<button type=\"submit\">connect</button>\n</form>\n");

    for error in &result.errors {
        writeln!(page, "<p><b>Error: </b>{}</p>", escape_html(error))?;
    }

    writeln!(page, "<pre>{}</pre>", escape_html(&dump))?;
    page.push_str("</body>\n</html>\n");

    Ok(page)
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result() -> BrowseResult {
        BrowseResult {
            brokers: None,
            topic: None,
            errors: vec![],
            messages: vec![],
            available_topics: vec![],
        }
    }

    #[test]
    fn markup_is_escaped() {
        assert_eq!(
            escape_html("<script>\"&'</script>"),
            "&lt;script&gt;&quot;&amp;&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn brokers_input_is_prefilled() {
        let result = BrowseResult {
            brokers: Some("localhost:9092,other:9093".to_owned()),
            ..empty_result()
        };

        let page = render_page(&result).unwrap();

        assert!(page.contains("<input name=\"brokers\" value=\"localhost:9092,other:9093\">"));
    }

    #[test]
    fn each_topic_gets_a_radio_button() {
        let result = BrowseResult {
            available_topics: vec!["orders".to_owned(), "events".to_owned()],
            ..empty_result()
        };

        let page = render_page(&result).unwrap();

        assert!(page.contains("<input type=\"radio\" name=\"topic\" value=\"orders\">"));
        assert!(page.contains("<input type=\"radio\" name=\"topic\" value=\"events\">"));
    }

    #[test]
    fn selected_topic_radio_is_checked() {
        let result = BrowseResult {
            topic: Some("orders".to_owned()),
            available_topics: vec!["orders".to_owned(), "events".to_owned()],
            ..empty_result()
        };

        let page = render_page(&result).unwrap();

        assert!(page.contains("<input type=\"radio\" name=\"topic\" value=\"orders\" checked>"));
        assert!(page.contains("<input type=\"radio\" name=\"topic\" value=\"events\">"));
    }

    #[test]
    fn errors_are_rendered_and_escaped() {
        let result = BrowseResult {
            errors: vec!["admin: broker <unreachable>".to_owned()],
            ..empty_result()
        };

        let page = render_page(&result).unwrap();

        assert!(page.contains("<p><b>Error: </b>admin: broker &lt;unreachable&gt;</p>"));
    }

    #[test]
    fn json_dump_is_embedded() {
        let result = BrowseResult {
            brokers: Some("localhost:9092".to_owned()),
            ..empty_result()
        };

        let page = render_page(&result).unwrap();

        assert!(page.contains("&quot;availableTopics&quot;"));
        assert!(page.contains("&quot;brokers&quot;: &quot;localhost:9092&quot;"));
    }
}
