use std::hint;
use std::time::Instant;
use towline::List;

const COUNT: usize = 1_000_000;

fn warmup() {
  let mut s = 1u64;
  for i in 0 .. 1_000_000_000 { s = s.wrapping_mul(i); }
  let _: u64 = hint::black_box(s);
}

fn timeit<A, F>(f: F) -> f64 where F: FnOnce() -> A {
  let start = Instant::now();
  let _: A = hint::black_box(f());
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F, A, B>(name: &str, t: A, f: F) where F: Fn(A, usize) -> B {
  let elapsed = timeit(|| f(t, hint::black_box(COUNT)));
  print!("{:25} {:.3} ns\n", name, elapsed / (COUNT as f64));
}

#[inline(never)]
fn bench_towline(_: (), count: usize) -> u64 {
  let Some(list) = List::new(0 .. count as u64) else { return 0 };
  let mut sum = 0;
  for value in list.iter() {
    sum = sum + *value;
  }
  sum
}

#[inline(never)]
fn bench_towline_bump(bump: &bumpalo::Bump, count: usize) -> u64 {
  let Some(list) = List::new_in(0 .. count as u64, bump) else { return 0 };
  let mut sum = 0;
  for value in list.iter() {
    sum = sum + *value;
  }
  sum
}

#[inline(never)]
fn bench_linked_list(_: (), count: usize) -> u64 {
  let list: std::collections::LinkedList<u64> = (0 .. count as u64).collect();
  let mut sum = 0;
  for value in list.iter() {
    sum = sum + *value;
  }
  sum
}

#[inline(never)]
fn bench_vec(_: (), count: usize) -> u64 {
  let vec: Vec<u64> = (0 .. count as u64).collect();
  let mut sum = 0;
  for value in vec.iter() {
    sum = sum + *value;
  }
  sum
}

fn main() {
  warmup();

  let bump = &bumpalo::Bump::new();

  run_bench("towline", (), bench_towline);
  run_bench("towline/bumpalo", bump, bench_towline_bump);
  run_bench("linked_list", (), bench_linked_list);
  run_bench("vec", (), bench_vec);
}
