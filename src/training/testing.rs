//! In-memory collaborators for exercising tasks without real data or models

use std::cell::{Cell, RefCell};

use crate::tasks::RunConfig;

use super::{DataHandler, Trainer};

/// Serves batches `0..n`, partitioned round-robin by rank, and records each request
pub(crate) struct FakeHandler {
    batches: Vec<usize>,
    calls: RefCell<Vec<String>>,
}

impl FakeHandler {
    pub(crate) fn new(batches: Vec<usize>) -> Self {
        Self {
            batches,
            calls: RefCell::new(vec![]),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl DataHandler for FakeHandler {
    type Batch = usize;
    type Iter = std::vec::IntoIter<usize>;

    fn get_train_iter(&self, rank: usize, world_size: usize) -> anyhow::Result<Self::Iter> {
        self.calls
            .borrow_mut()
            .push(format!("train {}/{}", rank, world_size));

        Ok(self
            .batches
            .iter()
            .copied()
            .filter(|batch| batch % world_size == rank)
            .collect::<Vec<_>>()
            .into_iter())
    }

    fn get_eval_iter(&self) -> anyhow::Result<Self::Iter> {
        self.calls.borrow_mut().push("eval".to_string());

        Ok(self.batches.clone().into_iter())
    }

    fn get_test_iter(&self) -> anyhow::Result<Self::Iter> {
        self.calls.borrow_mut().push("test".to_string());

        Ok(self.batches.clone().into_iter())
    }
}

/// "Trains" a model by remembering the batches it saw
pub(crate) struct FakeTrainer {
    calls: Cell<usize>,
    fail: bool,
}

impl FakeTrainer {
    pub(crate) fn new() -> Self {
        Self {
            calls: Cell::new(0),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            calls: Cell::new(0),
            fail: true,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Trainer for FakeTrainer {
    type Batch = usize;
    type Model = Vec<usize>;
    type MetricReporter = ();
    type Optimizer = usize;
    type LrScheduler = usize;
    type Output = usize;

    fn train_single_model<I, E>(
        &self,
        train_iter: I,
        eval_iter: E,
        model: &mut Self::Model,
        _metric_reporter: &Self::MetricReporter,
        _run_config: &RunConfig,
        optimizer: &mut Self::Optimizer,
        lr_scheduler: &mut Self::LrScheduler,
    ) -> anyhow::Result<Self::Output>
    where
        I: Iterator<Item = Self::Batch>,
        E: Iterator<Item = Self::Batch>,
    {
        self.calls.set(self.calls.get() + 1);

        if self.fail {
            anyhow::bail!("training diverged");
        }

        for batch in train_iter {
            model.push(batch);
            *optimizer += 1;
        }

        let _ = eval_iter.count();
        *lr_scheduler += 1;

        Ok(model.len())
    }

    fn test<I>(
        &self,
        test_iter: I,
        _model: &Self::Model,
        _metric_reporter: &Self::MetricReporter,
    ) -> anyhow::Result<Self::Output>
    where
        I: Iterator<Item = Self::Batch>,
    {
        Ok(test_iter.count())
    }
}
