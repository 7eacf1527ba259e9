use serde::{Deserialize, Serialize};

/// Word embedding feature
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct WordFeatConfig {
    /// Embedding dimension
    #[config(default = 100)]
    pub embed_dim: usize,

    /// Keep the embedding weights fixed during training
    #[config(default = false)]
    pub freeze: bool,

    /// Minimum token frequency to enter the vocabulary
    #[config(default = 1)]
    pub min_freq: usize,

    /// Cap on the vocabulary size
    pub vocab_size: Option<usize>,

    /// Pretrained embeddings to initialize from
    pub pretrained_embeddings_path: Option<String>,
}

/// Character CNN feature
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct CharFeatConfig {
    /// Embedding dimension
    #[config(default = 100)]
    pub embed_dim: usize,

    /// Number of CNN kernels per size
    #[config(default = 100)]
    pub kernel_num: usize,

    /// CNN kernel widths
    #[config(default = "vec![3, 4]")]
    pub kernel_sizes: Vec<usize>,

    /// Characters kept per word
    #[config(default = 20)]
    pub max_word_length: usize,
}

/// How dictionary feature embeddings are pooled per token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictPooling {
    /// Average
    Mean,
    /// Maximum
    Max,
}

/// Gazetteer (dictionary) feature
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct DictFeatConfig {
    /// Embedding dimension
    #[config(default = 100)]
    pub embed_dim: usize,

    /// Pooling across dictionary matches
    #[config(default = "DictPooling::Mean")]
    pub pooling: DictPooling,
}

/// Model inputs shared by most tasks
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct FeatureConfig {
    /// Word embedding feature
    #[config(default = "WordFeatConfig::new()")]
    pub word_feat: WordFeatConfig,

    /// Optional character CNN feature
    pub char_feat: Option<CharFeatConfig>,

    /// Optional dictionary feature
    pub dict_feat: Option<DictFeatConfig>,
}

/// Model inputs for text pair classification
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct PairFeatureConfig {
    /// First text of the pair
    #[config(default = "WordFeatConfig::new()")]
    pub text1: WordFeatConfig,

    /// Second text of the pair
    #[config(default = "WordFeatConfig::new()")]
    pub text2: WordFeatConfig,
}

/// Model inputs for query/document pairwise ranking
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct QueryDocumentFeatureConfig {
    /// The preferred response
    #[config(default = "WordFeatConfig::new()")]
    pub pos_response: WordFeatConfig,

    /// The dispreferred response
    #[config(default = "WordFeatConfig::new()")]
    pub neg_response: WordFeatConfig,

    /// The query
    #[config(default = "WordFeatConfig::new()")]
    pub query: WordFeatConfig,
}

/// Model inputs for contextual intent/slot models, which also read the preceding utterances
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct ContextualFeatureConfig {
    /// Word embedding feature
    #[config(default = "WordFeatConfig::new()")]
    pub word_feat: WordFeatConfig,

    /// Optional character CNN feature
    pub char_feat: Option<CharFeatConfig>,

    /// Optional dictionary feature
    pub dict_feat: Option<DictFeatConfig>,

    /// Word embedding over the sequence of context utterances
    #[config(default = "WordFeatConfig::new()")]
    pub seq_word_feat: WordFeatConfig,
}
