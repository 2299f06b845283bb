use crate::app_config::AppConfig;
use crate::browse::{BrowseResult, MessageDto};
use crate::query_string::BrowsePageParams;
use kafka_browser::connection_settings::KafkaConnectionSettings;
use kafka_browser::error::StageError;
use kafka_browser::queries::list_topics::{list_topics, ListTopicsQueryInternal};
use kafka_browser::queries::peek_messages::{
    peek_messages, PeekMessagesQueryInternal, PeekOutcome, StartFrom,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub async fn fetch_browse_result(params: &BrowsePageParams, config: &AppConfig) -> BrowseResult {
    let mut errors: Vec<StageError> = Vec::new();
    let mut available_topics = Vec::new();
    let mut messages = Vec::new();

    let brokers = params.broker_list();
    if !brokers.is_empty() {
        let connection_settings = KafkaConnectionSettings::new(
            brokers,
            config.kafka.security_protocol,
            config.kafka.retries,
        );
        debug!("Probing brokers {:?}", connection_settings.brokers);

        let list_query = ListTopicsQueryInternal {
            connection_settings: connection_settings.clone(),
            metadata_timeout: config.kafka.metadata_timeout(),
        };
        match list_topics(list_query).await {
            Ok(response) => {
                available_topics.extend(response.topics.into_iter().map(|t| t.topic_name));
            }
            Err(e) => errors.push(StageError::admin(e)),
        }

        if let Some(topic) = params.topic.as_ref() {
            let cancellation_token = CancellationToken::new();
            let _guard = cancellation_token.clone().drop_guard();

            let peek_query = PeekMessagesQueryInternal {
                connection_settings,
                topic: topic.clone(),
                start_from: StartFrom::Beginning,
                limit: config.kafka.peek_limit(),
                metadata_timeout: config.kafka.metadata_timeout(),
            };
            match peek_messages(peek_query, cancellation_token).await {
                Ok(response) => {
                    debug!("Peek finished: {:?}", response.outcome);

                    if let PeekOutcome::BrokerError(e) = response.outcome {
                        errors.push(StageError::consumer(e));
                    }

                    messages.extend(response.messages.into_iter().map(MessageDto::from));
                }
                Err(e) => errors.push(StageError::consumer(e)),
            }
        }
    }

    BrowseResult {
        brokers: params.brokers.clone(),
        topic: params.topic.clone(),
        errors: errors.iter().map(|e| e.to_string()).collect(),
        messages,
        available_topics,
    }
}
