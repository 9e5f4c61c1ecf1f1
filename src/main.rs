use lane_vectors::{LaneError, VectorDemo};

fn main() -> Result<(), LaneError> {
    env_logger::init();

    let demo = VectorDemo::run()?;
    log::trace!("{:?}", demo);
    println!("{}", demo.summary_line());
    Ok(())
}
