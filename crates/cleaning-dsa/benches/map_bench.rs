// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cleaning_dsa::map::{AnyMap, Map, MapKind, SkipListConfig};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn room_names(n: usize, rng: &mut impl Rng) -> Vec<String> {
    let mut names: Vec<String> = (0..n).map(|i| format!("Room {i:05}")).collect();
    names.shuffle(rng);
    names
}

fn filled(kind: MapKind, keys: &[String]) -> AnyMap<String, usize> {
    let mut m = kind.create(SkipListConfig::default());
    for (i, k) in keys.iter().enumerate() {
        m.put(k.clone(), i);
    }
    m
}

fn bench_put(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC1EA_2);
    for &n in &[64usize, 512, 4_096] {
        let keys = room_names(n, &mut rng);
        let mut group = c.benchmark_group(format!("map_put/{n}"));
        group.throughput(Throughput::Elements(n as u64));
        for kind in MapKind::ALL {
            // Association lists are quadratic to fill; keep the large case tractable.
            if kind == MapKind::UnorderedLinked && n > 512 {
                continue;
            }
            group.bench_function(BenchmarkId::new("put", kind), |b| {
                b.iter_batched(
                    || keys.clone(),
                    |keys| {
                        let mut m: AnyMap<String, usize> = kind.create(SkipListConfig::default());
                        for (i, k) in keys.into_iter().enumerate() {
                            m.put(k, i);
                        }
                        black_box(m.len())
                    },
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

fn bench_get(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC1EA_3);
    for &n in &[64usize, 512, 4_096] {
        let keys = room_names(n, &mut rng);
        let probes: Vec<String> = (0..1_000)
            .map(|_| keys[rng.random_range(0..keys.len())].clone())
            .collect();
        let mut group = c.benchmark_group(format!("map_get/{n}"));
        group.throughput(Throughput::Elements(probes.len() as u64));
        for kind in MapKind::ALL {
            if kind == MapKind::UnorderedLinked && n > 512 {
                continue;
            }
            let m = filled(kind, &keys);
            group.bench_function(BenchmarkId::new("get", kind), |b| {
                b.iter(|| {
                    let mut acc = 0usize;
                    for p in &probes {
                        acc += *m.get(black_box(p)).unwrap_or(&0);
                    }
                    black_box(acc)
                })
            });
        }
        group.finish();
    }
}

fn bench_iter(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC1EA_4);
    let keys = room_names(2_048, &mut rng);
    let mut group = c.benchmark_group("map_iter");
    group.throughput(Throughput::Elements(keys.len() as u64));
    for kind in [MapKind::SearchTable, MapKind::SkipList] {
        let m = filled(kind, &keys);
        group.bench_function(BenchmarkId::new("iter", kind), |b| {
            b.iter(|| black_box(m.iter().map(|(_, v)| *v).sum::<usize>()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_put, bench_get, bench_iter);
criterion_main!(benches);
