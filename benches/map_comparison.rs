use std::collections::HashMap as StdHashMap;
use std::hash::BuildHasher;
use std::hint::black_box;

use chain_hash::HashMap as ChainHashMap;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownHashMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

/// All three maps run with the same keyed SipHash builder so the comparison
/// measures table layout, not hash quality.
#[derive(Clone)]
struct SipHashBuilder {
    k1: u64,
    k2: u64,
}

impl BuildHasher for SipHashBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new_with_keys(self.k1, self.k2)
    }
}

impl Default for SipHashBuilder {
    fn default() -> Self {
        let mut rng = OsRng;
        Self {
            k1: rng.try_next_u64().unwrap_or(0),
            k2: rng.try_next_u64().unwrap_or(0),
        }
    }
}

const SIZES: &[usize] = &[1 << 10, 1 << 13, 1 << 16];

const LOOKUPS: usize = 1 << 14;

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    let mut rng = OsRng;

    for &size in SIZES {
        let keys = (0..size)
            .map(|_| rng.try_next_u64().unwrap())
            .collect::<Vec<u64>>();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("chain_hash", size), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = ChainHashMap::with_hasher(SipHashBuilder::default());
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("std", size), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = StdHashMap::with_hasher(SipHashBuilder::default());
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("hashbrown", size), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = HashbrownHashMap::with_hasher(SipHashBuilder::default());
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_lookup_zipf(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_zipf");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = (0..size as u64).collect::<Vec<u64>>();
        let distr = Zipf::new(size as f64 - 1.0, 1.0).unwrap();

        let mut chain_map = ChainHashMap::with_hasher(SipHashBuilder::default());
        let mut std_map = StdHashMap::with_hasher(SipHashBuilder::default());
        let mut hashbrown_map = HashbrownHashMap::with_hasher(SipHashBuilder::default());
        for &key in &keys {
            chain_map.insert(key, key);
            std_map.insert(key, key);
            hashbrown_map.insert(key, key);
        }

        let lookup_keys = || {
            let mut rng = SmallRng::from_os_rng();
            (0..LOOKUPS)
                .map(|_| rng.sample(distr) as u64)
                .collect::<Vec<u64>>()
        };

        group.throughput(Throughput::Elements(LOOKUPS as u64));
        group.bench_function(BenchmarkId::new("chain_hash", size), |b| {
            b.iter_batched(
                lookup_keys,
                |lookups| {
                    let mut hits = 0usize;
                    for key in lookups {
                        if chain_map.get(&key).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("std", size), |b| {
            b.iter_batched(
                lookup_keys,
                |lookups| {
                    let mut hits = 0usize;
                    for key in lookups {
                        if std_map.get(&key).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("hashbrown", size), |b| {
            b.iter_batched(
                lookup_keys,
                |lookups| {
                    let mut hits = 0usize;
                    for key in lookups {
                        if hashbrown_map.get(&key).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_remove_half(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_half");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = (0..size as u64).collect::<Vec<u64>>();

        group.throughput(Throughput::Elements(size as u64 / 2));
        group.bench_function(BenchmarkId::new("chain_hash", size), |b| {
            b.iter_batched(
                || {
                    let mut map = ChainHashMap::with_hasher(SipHashBuilder::default());
                    for &key in &keys {
                        map.insert(key, key);
                    }
                    let mut victims = keys.clone();
                    victims.shuffle(&mut SmallRng::from_os_rng());
                    victims.truncate(keys.len() / 2);
                    (map, victims)
                },
                |(mut map, victims)| {
                    for key in victims {
                        map.remove(&key);
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("std", size), |b| {
            b.iter_batched(
                || {
                    let mut map = StdHashMap::with_hasher(SipHashBuilder::default());
                    for &key in &keys {
                        map.insert(key, key);
                    }
                    let mut victims = keys.clone();
                    victims.shuffle(&mut SmallRng::from_os_rng());
                    victims.truncate(keys.len() / 2);
                    (map, victims)
                },
                |(mut map, victims)| {
                    for key in victims {
                        map.remove(&key);
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("hashbrown", size), |b| {
            b.iter_batched(
                || {
                    let mut map = HashbrownHashMap::with_hasher(SipHashBuilder::default());
                    for &key in &keys {
                        map.insert(key, key);
                    }
                    let mut victims = keys.clone();
                    victims.shuffle(&mut SmallRng::from_os_rng());
                    victims.truncate(keys.len() / 2);
                    (map, victims)
                },
                |(mut map, victims)| {
                    for key in victims {
                        map.remove(&key);
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random,
    bench_lookup_zipf,
    bench_remove_half
);
criterion_main!(benches);
