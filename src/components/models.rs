//! Model configurations. The architectures themselves live with the training backend.

use serde::{Deserialize, Serialize};

/// Document representation layers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocRepresentation {
    /// BiLSTM with self attention pooling
    BiLstmDocAttention,
    /// Convolutional document encoder
    DocNn,
}

/// Word representation layers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordRepresentation {
    /// BiLSTM with slot attention
    BiLstmSlotAttention,
    /// Plain BiLSTM
    BiLstm,
}

/// Joint document + word representation layers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointRepresentation {
    /// Shared BiLSTM with doc and slot attention
    BiLstmDocSlotAttention,
    /// Shared CNN
    JointCnn,
}

/// Output layer for word tagging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordOutputLayer {
    /// Independent softmax per token
    Softmax,
    /// Linear-chain CRF
    Crf,
}

/// Composition function for the RNNG stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionalType {
    /// BiLSTM composition
    Blstm,
    /// Sum of child embeddings
    Sum,
}

/// Document classification model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct DocModelConfig {
    /// Representation layer
    #[config(default = "DocRepresentation::BiLstmDocAttention")]
    pub representation: DocRepresentation,

    /// Hidden dimensions of the MLP decoder
    #[config(default = "Vec::new()")]
    pub decoder_hidden_dims: Vec<usize>,

    /// Dropout probability
    #[config(default = 0.4)]
    pub dropout: f64,
}

/// Word tagging model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct WordTaggingModelConfig {
    /// Representation layer
    #[config(default = "WordRepresentation::BiLstmSlotAttention")]
    pub representation: WordRepresentation,

    /// Output layer
    #[config(default = "WordOutputLayer::Softmax")]
    pub output_layer: WordOutputLayer,

    /// Hidden dimensions of the MLP decoder
    #[config(default = "Vec::new()")]
    pub decoder_hidden_dims: Vec<usize>,
}

/// Joint intent/slot model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct JointModelConfig {
    /// Representation layer
    #[config(default = "JointRepresentation::BiLstmDocSlotAttention")]
    pub representation: JointRepresentation,

    /// Output layer for the slot head
    #[config(default = "WordOutputLayer::Softmax")]
    pub word_output_layer: WordOutputLayer,

    /// Loss weight of the intent head
    #[config(default = 0.2)]
    pub doc_loss_weight: f64,

    /// Loss weight of the slot head
    #[config(default = 0.5)]
    pub word_loss_weight: f64,
}

/// Contextual intent/slot model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct ContextualIntentSlotModelConfig {
    /// Representation of the current utterance
    #[config(default = "JointRepresentation::BiLstmDocSlotAttention")]
    pub representation: JointRepresentation,

    /// Representation of the context utterance sequence
    #[config(default = "DocRepresentation::DocNn")]
    pub seq_representation: DocRepresentation,

    /// Loss weight of the intent head
    #[config(default = 0.2)]
    pub doc_loss_weight: f64,

    /// Loss weight of the slot head
    #[config(default = 0.5)]
    pub word_loss_weight: f64,
}

/// LSTM language model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct LmLstmConfig {
    /// LSTM hidden dimension
    #[config(default = 32)]
    pub lstm_dim: usize,

    /// Number of LSTM layers
    #[config(default = 1)]
    pub num_layers: usize,

    /// Share input embedding and output projection weights
    #[config(default = false)]
    pub tied_weights: bool,

    /// Carry hidden state across batches
    #[config(default = false)]
    pub stateful: bool,
}

/// Text pair classification model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct PairClassificationModelConfig {
    /// Representation applied to each text
    #[config(default = "DocRepresentation::BiLstmDocAttention")]
    pub representation: DocRepresentation,

    /// Use one representation module for both texts
    #[config(default = true)]
    pub shared_representations: bool,

    /// Add elementwise product and difference features between the two texts
    #[config(default = true)]
    pub encode_relations: bool,
}

/// Query/document pairwise ranking model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct QueryDocumentPairwiseRankingModelConfig {
    /// Representation applied to the query and responses
    #[config(default = "DocRepresentation::BiLstmDocAttention")]
    pub representation: DocRepresentation,

    /// Use one representation module for query and responses
    #[config(default = true)]
    pub shared_representations: bool,
}

/// Sequence-of-utterances classification model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct SeqNnModelConfig {
    /// Representation of each utterance
    #[config(default = "DocRepresentation::DocNn")]
    pub doc_representation: DocRepresentation,

    /// Representation over the utterance sequence
    #[config(default = "DocRepresentation::BiLstmDocAttention")]
    pub seq_representation: DocRepresentation,
}

/// RNNG shift-reduce semantic parser
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct RnngParserConfig {
    /// LSTM hidden dimension
    #[config(default = 32)]
    pub lstm_dim: usize,

    /// Number of LSTM layers
    #[config(default = 1)]
    pub lstm_layers: usize,

    /// Composition function
    #[config(default = "CompositionalType::Blstm")]
    pub compositional_type: CompositionalType,

    /// Maximum open non-terminals allowed on the stack
    #[config(default = 10)]
    pub max_open_nt: usize,

    /// Dropout probability
    #[config(default = 0.1)]
    pub dropout: f64,

    /// Beam size during inference
    #[config(default = 1)]
    pub beam_size: usize,

    /// Parses returned from the beam
    #[config(default = 1)]
    pub top_k: usize,
}

/// Bagging ensemble of document classifiers
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct BaggingDocEnsembleConfig {
    /// The sub-models
    pub models: Vec<DocModelConfig>,

    /// Fraction of the training data sampled for each sub-model
    #[config(default = 1.0)]
    pub sample_rate: f64,
}

/// Bagging ensemble of joint intent/slot models
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct BaggingIntentSlotEnsembleConfig {
    /// The sub-models
    pub models: Vec<JointModelConfig>,

    /// Fraction of the training data sampled for each sub-model
    #[config(default = 1.0)]
    pub sample_rate: f64,

    /// Decode the averaged slot scores with a CRF
    #[config(default = false)]
    pub use_crf: bool,
}

/// The ensemble shapes an ensemble task accepts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnsembleModelConfig {
    /// Document classification ensemble
    BaggingDoc(BaggingDocEnsembleConfig),

    /// Joint intent/slot ensemble
    BaggingIntentSlot(BaggingIntentSlotEnsembleConfig),
}

impl EnsembleModelConfig {
    /// The number of sub-models in the ensemble
    pub fn num_models(&self) -> usize {
        match self {
            EnsembleModelConfig::BaggingDoc(config) => config.models.len(),
            EnsembleModelConfig::BaggingIntentSlot(config) => config.models.len(),
        }
    }

    /// The sampling rate applied to each sub-model's training data
    pub fn sample_rate(&self) -> f64 {
        match self {
            EnsembleModelConfig::BaggingDoc(config) => config.sample_rate,
            EnsembleModelConfig::BaggingIntentSlot(config) => config.sample_rate,
        }
    }
}

impl From<BaggingDocEnsembleConfig> for EnsembleModelConfig {
    fn from(config: BaggingDocEnsembleConfig) -> Self {
        EnsembleModelConfig::BaggingDoc(config)
    }
}

impl From<BaggingIntentSlotEnsembleConfig> for EnsembleModelConfig {
    fn from(config: BaggingIntentSlotEnsembleConfig) -> Self {
        EnsembleModelConfig::BaggingIntentSlot(config)
    }
}
