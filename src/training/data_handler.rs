/// Supplies batches to a trainer. Reading, tokenizing and batching data happen behind this seam.
pub trait DataHandler {
    /// One batch of model inputs and targets
    type Batch;

    /// Iterator over batches
    type Iter: Iterator<Item = Self::Batch>;

    /// Training batches for the given partition of `world_size` data-parallel workers
    fn get_train_iter(&self, rank: usize, world_size: usize) -> anyhow::Result<Self::Iter>;

    /// Evaluation batches
    fn get_eval_iter(&self) -> anyhow::Result<Self::Iter>;

    /// Test batches
    fn get_test_iter(&self) -> anyhow::Result<Self::Iter>;
}
