use crate::connection_settings::KafkaConnectionSettings;
use crate::consumer::AutoOffsetReset;
use anyhow::Context;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

pub struct ConsumerWrapper {
    consumer: StreamConsumer,
}

impl ConsumerWrapper {
    // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
    pub fn create_for_peeking(
        settings: &KafkaConnectionSettings,
        group: &str,
        auto_offset_reset: AutoOffsetReset,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(settings)?;
        config
            .set("group.id", group)
            .set("auto.offset.reset", auto_offset_reset.to_string())
            .set("enable.partition.eof", "true")
            .set("session.timeout.ms", "10000")
            .set("enable.auto.commit", "false");

        let consumer: StreamConsumer = config
            .create()
            .context("While creating kafka StreamConsumer")?;

        Ok(Self { consumer })
    }

    pub fn create_for_metadata(settings: &KafkaConnectionSettings) -> Result<Self, anyhow::Error> {
        let config = ClientConfig::try_from(settings)?;

        let consumer: StreamConsumer = config
            .create()
            .context("While creating kafka metadata client")?;

        Ok(Self { consumer })
    }

    pub fn get_topic_partitions_count(
        &self,
        topic: &str,
        timeout: Duration,
    ) -> Result<usize, anyhow::Error> {
        let metadata = self
            .consumer
            .fetch_metadata(Some(topic), Timeout::After(timeout))
            .context("While fetching topic metadata")?;

        let partitions_count = metadata
            .topics()
            .iter()
            .find(|t| t.name() == topic)
            .map(|t| t.partitions().len())
            .unwrap_or(0);

        Ok(partitions_count)
    }
}

impl DerefMut for ConsumerWrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.consumer
    }
}

impl Deref for ConsumerWrapper {
    type Target = StreamConsumer;

    fn deref(&self) -> &Self::Target {
        &self.consumer
    }
}
