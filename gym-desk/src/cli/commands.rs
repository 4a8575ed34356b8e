//! Shell command grammar

use clap::{Parser, Subcommand};

use crate::roster::PaymentMethod;

/// One shell input line
#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "gym-desk", disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Add a regular member
    AddRegular {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        gender: String,
        /// Date of birth
        #[arg(long, default_value = "")]
        dob: String,
        /// Membership start date (default: today)
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long, default_value = "")]
        referral: String,
    },
    /// Add a premium member
    AddPremium {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        gender: String,
        /// Date of birth
        #[arg(long, default_value = "")]
        dob: String,
        /// Membership start date (default: today)
        #[arg(long)]
        start_date: Option<String>,
        /// Personal trainer
        #[arg(long)]
        trainer: String,
        #[arg(long)]
        referral: String,
        /// Premium charge
        #[arg(long, allow_negative_numbers = true)]
        charge: f64,
    },
    /// Activate a membership
    Activate { id: i64 },
    /// Deactivate a membership
    Deactivate { id: i64 },
    /// Mark one attendance
    Attend { id: i64 },
    /// Add loyalty points
    Points {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        points: f64,
    },
    /// Change a member's plan (basic, standard, deluxe)
    Upgrade { id: i64, plan: String },
    /// Reset a member; the reason is kept for regular members
    Revert {
        id: i64,
        #[arg(default_value = "")]
        reason: String,
    },
    /// Pay towards a premium charge
    Pay {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Settle dues: base price minus loyalty discount
    Settle {
        id: i64,
        /// cash, credit-card, debit-card or bank-transfer
        #[arg(long, default_value = "cash")]
        method: PaymentMethod,
        /// Activate an inactive membership first
        #[arg(long)]
        activate: bool,
    },
    /// Show the loyalty discount for a member
    Discount { id: i64 },
    /// Store the full-payment discount of a premium member
    PremiumDiscount { id: i64 },
    /// Show one member, or all of them
    Show {
        id: Option<i64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print both member tables
    List,
    /// Write both member files
    Save,
    /// Reload both member files, replacing the roster
    Load {
        /// Discard unsaved members without asking
        #[arg(long)]
        force: bool,
    },
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<ShellCommand, clap::Error> {
        let words = shell_words::split(line).unwrap();
        ShellLine::try_parse_from(words).map(|l| l.command)
    }

    #[test]
    fn test_positional_commands() {
        assert_eq!(parse("activate 3").unwrap(), ShellCommand::Activate { id: 3 });
        assert_eq!(
            parse("upgrade 3 deluxe").unwrap(),
            ShellCommand::Upgrade {
                id: 3,
                plan: "deluxe".to_string()
            }
        );
        assert_eq!(
            parse("revert 3 'moved away'").unwrap(),
            ShellCommand::Revert {
                id: 3,
                reason: "moved away".to_string()
            }
        );
        assert_eq!(
            parse("points 3 -5").unwrap(),
            ShellCommand::Points { id: 3, points: -5.0 }
        );
        assert_eq!(parse("quit").unwrap(), ShellCommand::Exit);
    }

    #[test]
    fn test_settle_options() {
        assert_eq!(
            parse("settle 4 --method 'credit card' --activate").unwrap(),
            ShellCommand::Settle {
                id: 4,
                method: PaymentMethod::CreditCard,
                activate: true
            }
        );
        assert!(parse("settle 4 --method cheque").is_err());
    }

    #[test]
    fn test_add_regular_requires_fields() {
        assert!(parse("add-regular --id 1 --name Sam").is_err());
        let cmd = parse("add-regular --id 1 --name 'Sam Lee' --phone 98 --email s@x").unwrap();
        assert!(matches!(cmd, ShellCommand::AddRegular { id: 1, start_date: None, .. }));
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        assert!(parse("activate abc").is_err());
    }
}
