// The page and its engine only run in the browser; native builds compile them for unit tests.
#[cfg(any(target_arch = "wasm32", test))]
mod content;
#[cfg(any(target_arch = "wasm32", test))]
mod interaction;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
