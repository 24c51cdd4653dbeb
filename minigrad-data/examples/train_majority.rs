//! # Training a small MLP on the majority-vote task
//!
//! Each sample is five random bits; the label is 1 when at least three of
//! them are set. The example:
//! 1. builds a `Linear(5, 8) -> Linear(8, 1)` model with a fixed seed,
//! 2. trains it with mini-batch SGD on `MSELoss`,
//! 3. reports loss and accuracy after rounding predictions at 0.5.
//!
//! ## Running
//! `RUST_LOG=info cargo run -p minigrad-data --example train_majority`

use minigrad_core::model::Sequential;
use minigrad_core::nn::{Linear, MSELoss, Reduction};
use minigrad_core::optim::{Optimizer, SgdOptimizer};
use minigrad_core::{MinigradError, Module, Value};
use minigrad_data::{accuracy, DataLoader, Dataset, MajorityDataset, RandomSampler};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: u64 = 42;
const EPOCHS: usize = 50;
const BATCH_SIZE: usize = 8;
const LEARNING_RATE: f64 = 0.01;

fn evaluate(model: &Sequential, dataset: &MajorityDataset) -> Result<(f64, f64), MinigradError> {
    let mut preds = Vec::with_capacity(dataset.len());
    let mut targets = Vec::with_capacity(dataset.len());
    for i in 0..dataset.len() {
        let (x, y) = dataset.get(i)?;
        preds.extend(model.forward(&x)?);
        targets.push(y);
    }
    let loss = MSELoss::new(Reduction::Mean).calculate(&preds, &targets)?;
    let acc = accuracy(&preds, &targets, 0.5).unwrap_or(0.0);
    Ok((loss.value(), acc))
}

fn main() -> Result<(), MinigradError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let model = Sequential::new()
        .with_module("layer0", Linear::with_rng(5, 8, &mut rng)?)
        .with_module("layer1", Linear::with_rng(8, 1, &mut rng)?);
    log::info!("Model has {} parameters", model.num_parameters());

    let train = MajorityDataset::new(64, SEED)?;
    let test = MajorityDataset::new(32, SEED + 1)?;
    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::from_module(&model, LEARNING_RATE)?;
    let mut loader = DataLoader::new(
        train,
        BATCH_SIZE,
        RandomSampler::new(false, None).with_seed(SEED),
        false,
    )?;

    for epoch in 0..EPOCHS {
        loader.reset();
        let mut epoch_loss = 0.0;
        let mut batches = 0;
        for batch in loader.by_ref() {
            let batch = batch?;
            optimizer.zero_grad();
            let mut preds: Vec<Value> = Vec::with_capacity(batch.len());
            let mut targets = Vec::with_capacity(batch.len());
            for (x, y) in batch {
                preds.extend(model.forward(&x)?);
                targets.push(y);
            }
            let loss = loss_fn.calculate(&preds, &targets)?;
            loss.backward();
            optimizer.step()?;
            epoch_loss += loss.value();
            batches += 1;
        }
        if epoch % 10 == 0 || epoch == EPOCHS - 1 {
            log::info!("epoch {:>3}: mean batch loss {:.4}", epoch, epoch_loss / batches as f64);
        }
    }

    let (train_loss, train_acc) = evaluate(&model, loader.dataset())?;
    let (test_loss, test_acc) = evaluate(&model, &test)?;
    println!("train: loss {:.4}, accuracy {:.2}", train_loss, train_acc);
    println!("test:  loss {:.4}, accuracy {:.2}", test_loss, test_acc);
    Ok(())
}
