//! Zelana client CLI
//!
//! Exercises the client SDK end to end against a local keypair: building and
//! signing transfer/withdrawal requests, deriving shielded keys, and
//! generating ownership witnesses.
//!
//! Environment variables:
//!   ZELANA_KEYPAIR   - Path to keypair file (default: ./id.json)
//!   ZELANA_CHAIN_ID  - Chain ID for transfers (default: 1)

use std::env;

use anyhow::{Context, bail};
use zelana_message::withdraw_message;
use zelana_shielded::field::field_from_bytes;
use zelana_shielded::{OwnershipWitness, ShieldedKeys, WitnessEngine, random_blinding};
use zelana_txcodec::{
    AccountId, SignedTransaction, Transaction, TransactionData, TransactionType, hex_to_bytes32,
};
use zelana_wallet::{LocalWallet, Wallet, WalletSigner};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "genkey" => genkey(args.get(2).cloned()),
        "transfer" => transfer(&args[2..]).await,
        "withdraw" => withdraw(&args[2..]).await,
        "shielded-keys" => shielded_keys().await,
        "witness" => witness(&args[2..]).await,
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            println!("Unknown command: {cmd}");
            println!();
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Zelana client CLI");
    println!();
    println!("Usage:");
    println!("  zelana-client genkey [file]");
    println!("  zelana-client transfer <to_hex> <amount> <nonce>");
    println!("  zelana-client withdraw <to_base58> <amount> <nonce>");
    println!("  zelana-client shielded-keys");
    println!("  zelana-client witness <value> <position> [blinding_hex]");
    println!();
    println!("Environment:");
    println!("  ZELANA_KEYPAIR   keypair file (default: ./id.json)");
    println!("  ZELANA_CHAIN_ID  chain id for transfers (default: 1)");
}

fn keypair_path() -> String {
    env::var("ZELANA_KEYPAIR").unwrap_or_else(|_| "./id.json".to_string())
}

fn chain_id() -> anyhow::Result<u64> {
    match env::var("ZELANA_CHAIN_ID") {
        Ok(raw) => raw.parse().context("ZELANA_CHAIN_ID must be a u64"),
        Err(_) => Ok(1),
    }
}

fn load_signer() -> anyhow::Result<WalletSigner<LocalWallet>> {
    let path = keypair_path();
    let wallet = LocalWallet::load(&path)
        .with_context(|| format!("failed to load keypair from {path} (run genkey first)"))?;
    Ok(WalletSigner::new(wallet)?)
}

fn genkey(filename: Option<String>) -> anyhow::Result<()> {
    let path = filename.unwrap_or_else(keypair_path);
    let wallet = LocalWallet::generate()?;
    wallet.save(&path)?;

    println!("Wrote keypair to {path}");
    println!("Address (base58): {}", wallet.address());
    Ok(())
}

async fn transfer(args: &[String]) -> anyhow::Result<()> {
    let [to_hex, amount, nonce] = args else {
        bail!("usage: transfer <to_hex> <amount> <nonce>");
    };
    let to = AccountId(hex_to_bytes32(to_hex).context("invalid recipient")?);
    let amount: u64 = amount.parse().context("amount must be a u64 in lamports")?;
    let nonce: u64 = nonce.parse().context("nonce must be a u64")?;
    let chain_id = chain_id()?;

    let signer = load_signer()?;
    let request = signer.sign_transfer(to, amount, nonce, chain_id).await?;

    println!("Signed message:");
    println!("---");
    println!(
        "{}",
        zelana_message::transfer_message(
            &AccountId(request.from),
            &to,
            amount,
            nonce,
            chain_id
        )
    );
    println!("---");
    println!();
    println!("Request JSON:");
    println!("{}", serde_json::to_string_pretty(&request)?);

    // Also show the raw wire encoding the sequencer's binary endpoint takes.
    let data = TransactionData {
        from: AccountId(request.from),
        to,
        amount,
        nonce,
        chain_id,
    };
    let data_signature = signer.sign(&data.encode()).await?;
    let envelope = Transaction {
        sender: request.from,
        tx_type: TransactionType::Transfer(SignedTransaction {
            data,
            signature: data_signature.to_vec(),
            signer_pubkey: request.signer_pubkey,
        }),
        signature: data_signature.to_vec(),
    };
    let wire = envelope.encode()?;
    println!();
    println!("Wire encoding ({} bytes):", wire.len());
    println!("{}", hex::encode(wire));
    Ok(())
}

async fn withdraw(args: &[String]) -> anyhow::Result<()> {
    let [to_base58, amount, nonce] = args else {
        bail!("usage: withdraw <to_base58> <amount> <nonce>");
    };
    let decoded = bs58::decode(to_base58)
        .into_vec()
        .context("invalid L1 address")?;
    let to_l1: [u8; 32] = decoded
        .try_into()
        .map_err(|_| anyhow::anyhow!("L1 address must decode to 32 bytes"))?;
    let amount: u64 = amount.parse().context("amount must be a u64 in lamports")?;
    let nonce: u64 = nonce.parse().context("nonce must be a u64")?;

    let signer = load_signer()?;
    let request = signer.sign_withdrawal(to_l1, amount, nonce).await?;

    println!("Signed message:");
    println!("---");
    println!(
        "{}",
        withdraw_message(&AccountId(request.from), &to_l1, amount, nonce)
    );
    println!("---");
    println!();
    println!("Request JSON:");
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

async fn shielded_keys() -> anyhow::Result<()> {
    let signer = load_signer()?;
    let engine = WitnessEngine::shared().await;
    let keys = ShieldedKeys::derive(signer.pubkey(), &engine);

    println!("Wallet:           {}", signer.pubkey_base58());
    println!("Shielded address: {}", keys.address());
    println!("Viewing key:      {}", hex::encode(keys.viewing_key));
    Ok(())
}

async fn witness(args: &[String]) -> anyhow::Result<()> {
    let (value, position, blinding_hex) = match args {
        [value, position] => (value, position, None),
        [value, position, blinding] => (value, position, Some(blinding.clone())),
        _ => bail!("usage: witness <value> <position> [blinding_hex]"),
    };
    let value: u64 = value.parse().context("value must be a u64 in lamports")?;
    let position: u64 = position.parse().context("position must be a u64")?;

    let blinding = match blinding_hex {
        Some(s) => hex_to_bytes32(&s).context("invalid blinding")?,
        None => random_blinding()?,
    };

    let signer = load_signer()?;
    let engine = WitnessEngine::shared().await;
    let keys = ShieldedKeys::derive(signer.pubkey(), &engine);

    let witness = OwnershipWitness::from_private_inputs(
        &engine,
        field_from_bytes(&keys.spending_key),
        value,
        field_from_bytes(&blinding),
        position,
    );

    let public = engine.generate_witness(
        &hex::encode(keys.spending_key),
        value,
        &hex::encode(blinding),
        position,
    )?;

    println!("Public witness:");
    println!("{}", serde_json::to_string_pretty(&public)?);
    println!();
    println!("Prover request (POST /v2/ownership/prove):");
    println!("{}", serde_json::to_string_pretty(&witness.prove_request())?);
    Ok(())
}
