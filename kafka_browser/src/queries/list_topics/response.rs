#[derive(Debug)]
pub struct ListTopicsQueryInternalResponse {
    pub topics: Vec<KafkaTopicMetadata>,
}

#[derive(Debug)]
pub struct KafkaTopicMetadata {
    pub topic_name: String,
    pub partitions_count: usize,
}
