//! Built-in operation catalog.
//!
//! Each preset is one fixed configuration of the runner: step text plus an
//! outcome function over canned data. The payloads are deliberately static so
//! repeated runs classify identically; anything that should vary belongs in a
//! caller-supplied [`OutcomeFn`].

use crate::outcome::{Outcome, OutcomeFn};
use crate::script::Script;

pub const SECURITY_SCAN: &str = "security-scan";
pub const COMPILE: &str = "compile";
pub const EXTRACTION: &str = "extraction";
pub const CONVERT: &str = "convert";

#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub fn all() -> &'static [Preset] {
    &[
        Preset {
            id: SECURITY_SCAN,
            title: "Wallet security scan",
            summary: "Checks a wallet for delegate contracts and risky approvals",
        },
        Preset {
            id: COMPILE,
            title: "Contract compile",
            summary: "Compiles submitted contract source to bytecode",
        },
        Preset {
            id: EXTRACTION,
            title: "Token extraction",
            summary: "Recovers a trapped token balance to a safe wallet",
        },
        Preset {
            id: CONVERT,
            title: "Token conversion",
            summary: "Quotes and settles a token-to-ETH conversion",
        },
    ]
}

pub fn find(id: &str) -> Option<Preset> {
    all().iter().copied().find(|p| p.id == id)
}

/// Step script for a preset, or `None` for an unknown id.
pub fn script(id: &str, total_duration_ms: u64) -> Option<Script> {
    let steps: &[&str] = match id {
        SECURITY_SCAN => &[
            "Verifying wallet address...",
            "Scanning for delegate contracts...",
            "Checking token approvals...",
            "Compiling findings...",
        ],
        COMPILE => &[
            "Parsing source...",
            "Resolving imports...",
            "Generating bytecode...",
            "Verifying output...",
        ],
        EXTRACTION => &[
            "Connecting to wallet...",
            "Locating trapped tokens...",
            "Preparing extraction...",
            "Transferring balance...",
            "Confirming transfer...",
        ],
        CONVERT => &[
            "Quoting conversion rate...",
            "Approving spend...",
            "Swapping tokens...",
            "Settling...",
        ],
        _ => return None,
    };

    let steps = steps.iter().map(|s| s.to_string()).collect();
    // Preset step lists are non-empty and the duration is clamped upstream,
    // so validation cannot fail here.
    Script::new(id, steps, total_duration_ms).ok()
}

/// Outcome function for a preset. `input` feeds presets whose classification
/// inspects user-submitted text; the others ignore it.
pub fn outcome_fn(id: &str, input: Option<String>) -> Option<OutcomeFn> {
    let f: OutcomeFn = match id {
        SECURITY_SCAN => Box::new(|| {
            Outcome::success([
                ("address", "0x058C54f5ff0d2c7C84cCcF1d8a2883E2A6010d67"),
                ("delegates_found", "0"),
                ("risky_approvals", "0"),
                ("risk", "low"),
            ])
        }),
        COMPILE => Box::new(move || classify_compile(input.as_deref().unwrap_or(""))),
        EXTRACTION => Box::new(|| {
            Outcome::success([
                ("token", "ETHG"),
                ("recovered", "1990000"),
                ("destination", "0x6f1C9B56a2bF2C2e9C5a9f8454e5Bbf5E3eB2eD1"),
                ("status", "confirmed"),
            ])
        }),
        CONVERT => Box::new(|| {
            Outcome::success([
                ("from", "ETHGR"),
                ("to", "ETH"),
                ("rate", "0.00000925"),
                ("status", "settled"),
            ])
        }),
        _ => return None,
    };
    Some(f)
}

/// The source-text heuristic: anything containing "error" fails to compile.
fn classify_compile(source: &str) -> Outcome {
    if source.contains("error") {
        Outcome::failure("source contains errors")
    } else {
        Outcome::success([
            ("bytecode_bytes", "4212"),
            ("warnings", "0"),
            ("optimizer", "enabled"),
        ])
    }
}
