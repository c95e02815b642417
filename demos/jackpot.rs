use mcsim::prelude::*;

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut loaded = d6();
    loaded.set_weight(&6, 5)?;
    loaded.snapshot().print_table();

    let analyzer = Simulation::builder()
        .rolls(10_000)
        .seed(42)
        .build()
        .analyze([d6(), d6(), loaded])?;

    let rolls = analyzer.game().rolls();
    let jackpots = analyzer.jackpot_count();
    println!("jackpots: {jackpots}/{rolls}");

    println!("most common combinations:");
    for (key, count) in analyzer.combo_counts().most_common().into_iter().take(5) {
        println!("  {key:?}: {count}");
    }

    let totals = analyzer.face_counts().totals();
    println!("face totals: {totals:?}");
    Ok(())
}
