#[derive(Debug, Default, Eq, PartialEq)]
pub struct BrowsePageParams {
    pub brokers: Option<String>,
    pub topic: Option<String>,
}

impl BrowsePageParams {
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();

        for (name, value) in parse_query_pairs(query) {
            if value.is_empty() {
                continue;
            }

            match name.as_str() {
                "brokers" => params.brokers = Some(value),
                "topic" => params.topic = Some(value),
                _ => {}
            }
        }

        params
    }

    pub fn broker_list(&self) -> Vec<String> {
        self.brokers
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|broker| !broker.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let name = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();

            (decode_component(name), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");

    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}
