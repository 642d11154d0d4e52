use tinymlp::{Activation, Layer, Network, Res, Tensor, Unit};
use tracing::{debug, Level};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
    }
}

fn run() -> Res<()> {
    let input = Tensor::<f32>::new_1d(&[3.0, 4.0, 2.0])?;

    let m = Unit::new(&[1.0, -1.0, 3.0], 1.0, Activation::Tanh)?;
    let n = Unit::new(&[-1.0, 1.0, 5.0], 1.0, Activation::Sigmoid)?;
    let o = Unit::identity(&[-1.0, -1.0, 9.0], 1.0)?;

    let l = Layer::new(&[m.clone(), n.clone(), o.clone()])?;
    let l2 = Layer::new(&[m.clone(), n.clone(), o.clone()])?;
    let l3 = Layer::with_activation(&[m.clone(), n, o], Activation::Identity)?;

    println!("{}", m.forward(&input)?);

    let out = l.forward(&input)?;
    println!("{}", out);

    let prob = out.softmax()?;
    println!("{}", prob);
    println!("{}", prob.argmax_with_probability()?);

    println!("linear shape: {}", l.shape());
    let mlp = Network::new(&[l, l2, l3])?;
    println!("{}", mlp.shape());
    debug!(depth = mlp.depth(), "network assembled");
    println!("{}", mlp);

    let f = mlp.forward(&input)?;
    println!("{}", f);

    Ok(())
}
