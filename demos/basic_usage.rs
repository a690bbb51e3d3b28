// demos/basic_usage.rs
use mintfleet::{ConsoleConfig, FeeSettings, MintConsole, MintRequest, Network};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credential comes from GEMINI_API_KEY / API_KEY; everything still runs
    // without one, advice just falls back to the canned tip
    let console = MintConsole::new(ConsoleConfig::from_env())?;

    println!("🔧 Seeding fleet...");
    console.add_wallet(Network::Ethereum).await;
    console.add_wallet(Network::Ethereum).await;
    console.import_wallet(Network::Solana, "5J...7890").await;

    for wallet in console.wallets().await {
        println!("💳 {} [{}] {} ({})", wallet.label, wallet.network, wallet.address, wallet.balance);
    }

    println!("🏥 Running diagnostics...");
    let status = console.run_diagnostics().await;
    println!("Diagnostics: {:?}", status);

    let advice = console.boot_advice().await;
    println!("💡 {}", advice);

    let batch = console
        .mint(MintRequest {
            target: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
            network: Network::Ethereum,
            quantity: 2,
            fee: FeeSettings::default(),
        })
        .await;
    println!("⚡ Dispatched {} mint tasks", batch.len());

    let report = batch.join().await;
    println!(
        "✅ {} confirmed, {} dropped of {} attempted",
        report.confirmed, report.dropped, report.attempted
    );

    println!("📜 Activity (newest first):");
    for entry in console.activity().await {
        println!(
            "  [{}] {:<12} {:?}: {}",
            entry.timestamp, entry.wallet_label, entry.status, entry.message
        );
    }

    Ok(())
}
