//! # Minimizing a Small Function with Gradient Descent
//!
//! Finds the minimum of `f(x, y) = (x - 1)^2 + (x * y - 2)^2` with plain SGD.
//!
//! Each iteration builds a fresh `Graph` from the current parameter values,
//! runs `backward()` on the loss, and lets the optimizer compute the next
//! values. Building a new graph per iteration also keeps gradients from
//! accumulating across steps.
//!
//! Run with:
//! `cargo run --example minimize_quadratic`

use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let mut params = vec![0.0, 0.5];
    let mut optimizer = Sgd::with_momentum(0.05, 0.8);

    for epoch in 0..200 {
        let g = Graph::new();
        let x = g.leaf(params[0]);
        let y = g.leaf(params[1]);
        let loss = (x - 1.0).pow(2.0)? + (x * y - 2.0).pow(2.0)?;
        loss.backward();

        if epoch % 20 == 0 {
            println!(
                "Epoch {:>3}: loss = {:.6}, x = {:.4}, y = {:.4}",
                epoch,
                loss.value(),
                params[0],
                params[1]
            );
        }
        params = optimizer.step(&[x, y])?;
    }

    println!("Final: x = {:.4}, y = {:.4}", params[0], params[1]);

    // Graph of the final loss, as Graphviz DOT.
    let g = Graph::new();
    let x = g.leaf(params[0]);
    let y = g.leaf(params[1]);
    let loss = (x - 1.0).pow(2.0)? + (x * y - 2.0).pow(2.0)?;
    loss.backward();
    println!("{}", loss.export().to_dot());

    Ok(())
}
