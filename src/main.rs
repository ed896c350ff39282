use std::time::Instant;

use log::info;
use rand::{thread_rng, Rng};

use rs_fastmedian::method::median::median;
use rs_fastmedian::stats::vec::calc_median;
use rs_fastmedian::util::numeric::duration_ms;

fn main() {
    env_logger::init();

    let mut rng = thread_rng();

    // Compare the sort-based median against selection across a ramp of sizes
    println!("size\tsort_ms\tselect_ms");
    for size in (100_000..=1_000_000).step_by(100_000) {
        let values: Vec<f64> = (0..size).map(|_| rng.gen_range(0..size) as f64).collect();

        let previous_time = Instant::now();
        let expected = calc_median(&values).unwrap();
        let sort_ms = duration_ms(previous_time.elapsed());

        let mut scratch = values.clone();
        let previous_time = Instant::now();
        let actual = median(&mut scratch).unwrap();
        let select_ms = duration_ms(previous_time.elapsed());

        assert_eq!(actual, expected);
        info!("size {} agreed on {}", size, actual);
        println!("{}\t{:.3}\t{:.3}", size, sort_ms, select_ms);
    }

    println!("Done.");
}
