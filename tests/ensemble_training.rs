use std::cell::RefCell;

use burn::config::Config as _;
use burn_nlp_tasks::{
    components::models::{BaggingIntentSlotEnsembleConfig, JointModelConfig},
    labels::intent_slot_targets,
    tasks::{EnsembleTaskConfig, RunConfig, TaskConfig, TaskError},
    training::{DataHandler, Ensemble, EnsembleTask, Trainer},
};
use pretty_assertions::assert_eq;

/// Sentences, split across workers by position
struct Sentences(Vec<&'static str>);

impl DataHandler for Sentences {
    type Batch = &'static str;
    type Iter = std::vec::IntoIter<&'static str>;

    fn get_train_iter(&self, rank: usize, world_size: usize) -> anyhow::Result<Self::Iter> {
        Ok(self
            .0
            .iter()
            .enumerate()
            .filter(|(i, _)| i % world_size == rank)
            .map(|(_, sentence)| *sentence)
            .collect::<Vec<_>>()
            .into_iter())
    }

    fn get_eval_iter(&self) -> anyhow::Result<Self::Iter> {
        Ok(self.0.clone().into_iter())
    }

    fn get_test_iter(&self) -> anyhow::Result<Self::Iter> {
        Ok(self.0.clone().into_iter())
    }
}

/// Counts words per sub-model and logs which epochs ran
#[derive(Default)]
struct WordCounter {
    log: RefCell<Vec<String>>,
}

impl Trainer for WordCounter {
    type Batch = &'static str;
    type Model = usize;
    type MetricReporter = String;
    type Optimizer = Vec<usize>;
    type LrScheduler = ();
    type Output = usize;

    fn train_single_model<I, E>(
        &self,
        train_iter: I,
        _eval_iter: E,
        model: &mut Self::Model,
        metric_reporter: &Self::MetricReporter,
        run_config: &RunConfig,
        optimizer: &mut Self::Optimizer,
        _lr_scheduler: &mut Self::LrScheduler,
    ) -> anyhow::Result<Self::Output>
    where
        I: Iterator<Item = Self::Batch>,
        E: Iterator<Item = Self::Batch>,
    {
        *model += train_iter
            .map(|sentence| sentence.split_whitespace().count())
            .sum::<usize>();
        optimizer.push(*model);

        self.log.borrow_mut().push(format!(
            "{} {}",
            metric_reporter,
            run_config.task.name()
        ));

        Ok(*model)
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

fn saved_run_config() -> anyhow::Result<RunConfig> {
    let config = RunConfig::new(
        EnsembleTaskConfig::new(
            BaggingIntentSlotEnsembleConfig::new(vec![JointModelConfig::new(); 3]).into(),
            intent_slot_targets(),
        )
        .into(),
    )
    .with_distributed_world_size(2);

    let path = std::env::temp_dir().join(format!("ensemble_run_{}.json", std::process::id()));
    config.save(&path)?;

    let loaded = RunConfig::load_validated(&path);
    std::fs::remove_file(&path)?;

    Ok(loaded?)
}

fn ensemble_task(run_config: &RunConfig) -> EnsembleTask<Sentences, WordCounter> {
    let num_models = match &run_config.task {
        TaskConfig::Ensemble(config) => config.model.num_models(),
        _ => 0,
    };

    EnsembleTask::new(
        Sentences(vec![
            "what is the weather in paris",
            "play some jazz",
            "set an alarm for six",
            "wake me up",
        ]),
        Ensemble::new(vec![0; num_models]),
        WordCounter::default(),
        "intent_slot".to_string(),
        vec![],
        (),
    )
}

#[test]
fn test_ensemble_from_a_saved_run_config() -> anyhow::Result<()> {
    let run_config = saved_run_config()?;
    let mut task = ensemble_task(&run_config);

    assert_eq!(task.model.len(), 3);

    // Worker 1 of 2 sees the second and fourth sentences
    let outputs = task.train(&run_config, 1, run_config.distributed_world_size)?;

    assert_eq!(outputs, vec![6, 6, 6]);
    assert_eq!(task.model.models, vec![6, 6, 6]);
    assert_eq!(task.optimizer, vec![6, 6, 6]);
    assert_eq!(
        *task.trainer.log.borrow(),
        vec!["intent_slot ensemble"; 3]
    );

    Ok(())
}

#[test]
fn test_retraining_one_sub_model() -> anyhow::Result<()> {
    let run_config = saved_run_config()?;
    let mut task = ensemble_task(&run_config);

    task.train_single_model(&run_config, 2, 0, 2)?;
    task.train_single_model(&run_config, 2, 1, 2)?;

    assert_eq!(task.model.models, vec![0, 0, 17]);

    let err = task
        .train_single_model(&run_config, 3, 0, 2)
        .expect_err("only three sub-models");

    assert_eq!(
        err.downcast_ref::<TaskError>(),
        Some(&TaskError::ModelOutOfRange {
            model_id: 3,
            num_models: 3
        })
    );
    assert_eq!(task.model.models, vec![0, 0, 17]);
    assert_eq!(task.trainer.log.borrow().len(), 2);

    Ok(())
}
