use networkfs::fs::NetworkFs;
use networkfs::remote::HttpClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_owned());

    let fs = NetworkFs::new(HttpClient::new(endpoint));
    let root = fs.root();

    let page = fs.read_dir(root, root, 0).await?;
    println!("{} entries under root:", page.total);
    for entry in &page.entries {
        println!(
            "  {:?} {} {}",
            entry.kind,
            entry.id,
            String::from_utf8_lossy(&entry.name)
        );
    }

    let file = fs.create_file(root, b"demo.txt").await?;
    let written = fs.write(file.id, b"hello over the wire\n").await?;
    println!("wrote {} bytes into node {}", written, file.id);

    let content = fs.read_to_end(file.id).await?;
    println!("read back: {:?}", String::from_utf8_lossy(&content));

    fs.remove_file(root, b"demo.txt").await?;
    Ok(())
}
