use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::components::optimizer::{
    OptimizerConfig, SearchOutcome, CONVERGED_MESSAGE, MAX_ITERATIONS_MESSAGE,
};
use crate::utils::{mean_and_std, RngManager};

const RNG_STREAM: u64 = 1;

/// Differential evolution (`best/1/bin`) over a bounding box.
///
/// The population lives in the unit cube and is scaled onto the bounds for
/// evaluation. Each generation is built serially from one seeded stream and
/// evaluated in parallel; selection happens only once all trials are scored,
/// so the result depends on the seed alone.
#[derive(Debug, Clone)]
pub struct DifferentialEvolution<'a> {
    config: &'a OptimizerConfig,
}

impl<'a> DifferentialEvolution<'a> {
    pub fn new(config: &'a OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn minimize<F>(&self, bounds: &[(f64, f64)], cost: F) -> SearchOutcome
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        let dimensions = bounds.len();
        if dimensions == 0 {
            return SearchOutcome {
                x: Vec::new(),
                cost: cost(&[]),
                success: true,
                message: CONVERGED_MESSAGE.to_string(),
                iterations: 0,
                evaluations: 1,
            };
        }
        let population_size = self.config.population_for(dimensions);
        let mut rng = RngManager::new(self.config.seed).get_rng(RNG_STREAM);

        let scale = |member: &[f64]| -> Vec<f64> {
            member
                .iter()
                .zip(bounds)
                .map(|(u, (min, max))| min + u * (max - min))
                .collect()
        };
        let evaluate_all = |members: &[Vec<f64>]| -> Vec<f64> {
            members.par_iter().map(|member| cost(&scale(member))).collect()
        };

        let mut population = latin_hypercube(population_size, dimensions, &mut rng);
        let mut energies = evaluate_all(&population);
        let mut evaluations = population_size as u64;

        let mut converged = false;
        let mut iterations = 0;

        for generation in 1..=self.config.max_iterations {
            let best = best_index(&energies);
            let mutation = self.draw_mutation(&mut rng);

            let trials: Vec<Vec<f64>> = (0..population_size)
                .map(|i| self.trial(i, best, mutation, &population, &mut rng))
                .collect();
            let trial_energies = evaluate_all(&trials);
            evaluations += population_size as u64;

            for (i, (trial, energy)) in trials.into_iter().zip(trial_energies).enumerate() {
                if energy < energies[i] {
                    population[i] = trial;
                    energies[i] = energy;
                }
            }

            iterations = generation;
            let (mean, std) = mean_and_std(&energies);
            debug!(
                "DE generation {}: best {:.6e}, mean {:.6e}, std {:.3e}",
                generation,
                energies[best_index(&energies)],
                mean,
                std
            );
            if std <= self.config.tolerance * mean.abs() {
                converged = true;
                break;
            }
        }

        let best = best_index(&energies);
        SearchOutcome {
            x: scale(&population[best]),
            cost: energies[best],
            success: converged,
            message: if converged {
                CONVERGED_MESSAGE.to_string()
            } else {
                MAX_ITERATIONS_MESSAGE.to_string()
            },
            iterations: iterations as u64,
            evaluations,
        }
    }

    fn draw_mutation(&self, rng: &mut ChaCha8Rng) -> f64 {
        let (low, high) = self.config.mutation;
        if low < high {
            rng.gen_range(low..high)
        } else {
            low
        }
    }

    /// Mutant `best + F·(r1 − r2)` crossed with member `i`.
    fn trial(
        &self,
        i: usize,
        best: usize,
        mutation: f64,
        population: &[Vec<f64>],
        rng: &mut ChaCha8Rng,
    ) -> Vec<f64> {
        let n = population.len();
        let r1 = draw_distinct(rng, n, &[i]);
        let r2 = draw_distinct(rng, n, &[i, r1]);

        let member = &population[i];
        let dimensions = member.len();
        let fill_point = rng.gen_range(0..dimensions);

        (0..dimensions)
            .map(|j| {
                if j == fill_point || rng.gen::<f64>() < self.config.recombination {
                    let gene =
                        population[best][j] + mutation * (population[r1][j] - population[r2][j]);
                    if (0.0..=1.0).contains(&gene) {
                        gene
                    } else {
                        rng.gen()
                    }
                } else {
                    member[j]
                }
            })
            .collect()
    }
}

/// One sample per stratum in every dimension, strata shuffled
/// independently per dimension.
fn latin_hypercube(size: usize, dimensions: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<f64>> {
    let segment = 1.0 / size as f64;
    let mut population = vec![vec![0.0; dimensions]; size];

    for j in 0..dimensions {
        let mut samples: Vec<f64> = (0..size)
            .map(|k| (k as f64 + rng.gen::<f64>()) * segment)
            .collect();
        samples.shuffle(rng);
        for (member, sample) in population.iter_mut().zip(samples) {
            member[j] = sample;
        }
    }
    population
}

fn draw_distinct(rng: &mut ChaCha8Rng, n: usize, exclude: &[usize]) -> usize {
    loop {
        let candidate = rng.gen_range(0..n);
        if !exclude.contains(&candidate) {
            return candidate;
        }
    }
}

fn best_index(energies: &[f64]) -> usize {
    energies
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
