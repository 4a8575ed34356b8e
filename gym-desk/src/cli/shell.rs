//! Interactive shell
//!
//! Reads one command per line, tokenised with shell quoting rules. Errors
//! are printed and the loop continues.

use clap::Parser;
use shared::error::{AppError, AppResult};
use shared::models::{
    GymMember, Member, MemberProfile, PremiumMemberCreate, RegularMemberCreate,
};
use std::fmt;
use std::io::{BufRead, Write};

use super::commands::{ShellCommand, ShellLine};
use crate::roster::Roster;
use crate::storage::{LoadReport, MemberStore, render_premium, render_regular};

const PROMPT: &str = "gym> ";

/// Result of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the output (may be empty) and read the next line
    Continue(String),
    /// Leave the shell
    Exit,
}

/// Shell session over one roster and one store
pub struct Shell {
    roster: Roster,
    store: MemberStore,
}

impl Shell {
    pub fn new(store: MemberStore) -> Self {
        Self {
            roster: Roster::new(),
            store,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Replace the roster with the member files
    pub fn load(&mut self) -> LoadReport {
        self.store.load(&mut self.roster)
    }

    /// Run the read-eval-print loop until `exit` or end of input
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            match self.execute_line(&line?) {
                Flow::Continue(text) => {
                    if !text.is_empty() {
                        writeln!(output, "{text}")?;
                    }
                }
                Flow::Exit => return Ok(()),
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Execute one input line
    pub fn execute_line(&mut self, line: &str) -> Flow {
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => return Flow::Continue(format!("Error: {e}")),
        };
        if words.is_empty() {
            return Flow::Continue(String::new());
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => return Flow::Continue(e.to_string().trim_end().to_string()),
        };

        if command == ShellCommand::Exit {
            return Flow::Exit;
        }

        match self.execute(command) {
            Ok(text) => Flow::Continue(text),
            Err(e) => {
                tracing::debug!(
                    code = %e.code,
                    category = e.category().name(),
                    error = %e,
                    "Command failed"
                );
                Flow::Continue(format!("Error: {e}"))
            }
        }
    }

    fn execute(&mut self, command: ShellCommand) -> AppResult<String> {
        match command {
            ShellCommand::AddRegular {
                id,
                name,
                location,
                phone,
                email,
                gender,
                dob,
                start_date,
                referral,
            } => {
                let payload = RegularMemberCreate {
                    profile: MemberProfile {
                        id,
                        name,
                        location,
                        phone,
                        email,
                        gender,
                        date_of_birth: dob,
                        membership_start_date: start_date.unwrap_or_else(today),
                    },
                    referral_source: referral,
                };
                self.roster.add_regular(payload)?;
                Ok("Regular member added successfully!".to_string())
            }
            ShellCommand::AddPremium {
                id,
                name,
                location,
                phone,
                email,
                gender,
                dob,
                start_date,
                trainer,
                referral,
                charge,
            } => {
                let payload = PremiumMemberCreate {
                    profile: MemberProfile {
                        id,
                        name,
                        location,
                        phone,
                        email,
                        gender,
                        date_of_birth: dob,
                        membership_start_date: start_date.unwrap_or_else(today),
                    },
                    personal_trainer: trainer,
                    referral_source: referral,
                    premium_charge: charge,
                };
                self.roster.add_premium(payload)?;
                Ok("Premium member added successfully!".to_string())
            }
            ShellCommand::Activate { id } => {
                let member = self.roster.activate(id)?;
                Ok(format!("Membership activated for: {}", member.name()))
            }
            ShellCommand::Deactivate { id } => {
                let member = self.roster.deactivate(id)?;
                Ok(format!("Membership deactivated for: {}", member.name()))
            }
            ShellCommand::Attend { id } => {
                let attendance = self.roster.mark_attendance(id)?;
                Ok(format!("Attendance marked successfully! Total visits: {attendance}"))
            }
            ShellCommand::Points { id, points } => {
                let balance = self.roster.add_loyalty_points(id, points)?;
                Ok(format!("Loyalty points: {balance:.0}"))
            }
            ShellCommand::Upgrade { id, plan } => {
                Ok(self.roster.upgrade_plan(id, &plan)?.to_string())
            }
            ShellCommand::Revert { id, reason } => {
                let member = self.roster.revert(id, &reason)?;
                Ok(format!(
                    "{} member {} has been reverted successfully!",
                    member.kind(),
                    member.name()
                ))
            }
            ShellCommand::Pay { id, amount } => {
                Ok(self.roster.pay_due_amount(id, amount)?.to_string())
            }
            ShellCommand::Settle {
                id,
                method,
                activate,
            } => Ok(self.roster.settle_dues(id, method, activate)?.to_string()),
            ShellCommand::Discount { id } => Ok(self.roster.discount_quote(id)?.to_string()),
            ShellCommand::PremiumDiscount { id } => {
                let discount = self.roster.apply_full_payment_discount(id)?;
                if discount > 0.0 {
                    Ok(format!("Full payment discount: £{discount:.2}"))
                } else {
                    Ok("No discount available. Payment is not complete.".to_string())
                }
            }
            ShellCommand::Show { id, json } => self.show(id, json),
            ShellCommand::List => Ok(self.list()),
            ShellCommand::Save => self.save(),
            ShellCommand::Load { force } => Ok(self.reload(force)),
            ShellCommand::Exit => Ok(String::new()),
        }
    }

    fn show(&self, id: Option<i64>, json: bool) -> AppResult<String> {
        let members: Vec<&Member> = match id {
            Some(id) => vec![
                self.roster
                    .find(id)
                    .ok_or_else(|| AppError::member_not_found(id))?,
            ],
            None => self.roster.iter().collect(),
        };
        if members.is_empty() {
            return Ok("No members to display.".to_string());
        }

        if json {
            let value = match id {
                Some(_) => serde_json::to_string_pretty(members[0]),
                None => serde_json::to_string_pretty(&members),
            };
            return value.map_err(|e| AppError::internal(e.to_string()));
        }

        let blocks: Vec<String> = members
            .into_iter()
            .map(|m| MemberDetails(m).to_string())
            .collect();
        Ok(blocks.join("\n\n"))
    }

    fn list(&self) -> String {
        if self.roster.is_empty() {
            return "No members to display.".to_string();
        }
        format!(
            "{}\n{}",
            render_regular(self.roster.regulars()).trim_end(),
            render_premium(self.roster.premiums()).trim_end()
        )
    }

    fn save(&self) -> AppResult<String> {
        let report = self.store.save(&self.roster)?;
        Ok(report.to_string().trim_end().to_string())
    }

    fn reload(&mut self, force: bool) -> String {
        if !self.store.regular_path().exists() && !self.store.premium_path().exists() {
            return format!(
                "No member files found!\nExpected files:\n- {}\n- {}",
                self.store.regular_path().display(),
                self.store.premium_path().display()
            );
        }
        if !self.roster.is_empty() && !force {
            return "Loading members will clear existing data. Run `load --force` to continue."
                .to_string();
        }
        self.load().to_string()
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Multi-line text view of one member
struct MemberDetails<'a>(&'a Member);

impl fmt::Display for MemberDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let member = self.0;
        writeln!(f, "{} Member #{}", member.kind(), member.id())?;
        writeln!(f, "  Name: {}", member.name())?;
        writeln!(f, "  Location: {}", member.location())?;
        writeln!(f, "  Phone: {}", member.phone())?;
        writeln!(f, "  Email: {}", member.email())?;
        writeln!(f, "  Gender: {}", member.gender())?;
        writeln!(f, "  Date of Birth: {}", member.date_of_birth())?;
        writeln!(f, "  Start Date: {}", member.membership_start_date())?;
        writeln!(f, "  Plan: {}", member.plan())?;
        writeln!(f, "  Attendance: {}", member.attendance())?;
        writeln!(f, "  Loyalty Points: {:.0}", member.loyalty_points())?;
        write!(f, "  Status: {}", if member.is_active() { "Active" } else { "Inactive" })?;

        match member {
            Member::Regular(m) => {
                write!(f, "\n  Price: £{:.2}", m.price())?;
                write!(f, "\n  Referral Source: {}", m.referral_source())?;
                write!(
                    f,
                    "\n  Eligible for Upgrade: {}",
                    if m.is_eligible_for_upgrade() { "Yes" } else { "No" }
                )?;
                if !m.removal_reason().is_empty() {
                    write!(f, "\n  Removal Reason: {}", m.removal_reason())?;
                }
            }
            Member::Premium(m) => {
                write!(f, "\n  Personal Trainer: {}", m.personal_trainer())?;
                write!(f, "\n  Referral Source: {}", m.referral_source())?;
                write!(f, "\n  Premium Charge: £{:.2}", m.premium_charge())?;
                write!(f, "\n  Paid Amount: £{:.2}", m.paid_amount())?;
                write!(f, "\n  Remaining: £{:.2}", m.remaining_amount())?;
                write!(
                    f,
                    "\n  Full Payment: {}",
                    if m.is_full_payment() { "Yes" } else { "No" }
                )?;
                write!(f, "\n  Discount: £{:.2}", m.discount_amount())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn shell(dir: &TempDir) -> Shell {
        Shell::new(MemberStore::new(
            dir.path().join("regular_members.txt"),
            dir.path().join("premium_members.txt"),
        ))
    }

    fn output(flow: Flow) -> String {
        match flow {
            Flow::Continue(text) => text,
            Flow::Exit => panic!("unexpected exit"),
        }
    }

    const ADD_REGULAR: &str =
        "add-regular --id 1 --name 'Ram Thapa' --phone 9800000000 --email ram@gym.test --start-date 2025-01-01";
    const ADD_PREMIUM: &str = "add-premium --id 2 --name Sita --location Pokhara --phone 9811111111 --gender Female --trainer 'Coach Hari' --referral web --charge 50000";

    #[test]
    fn test_add_and_show() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);

        assert_eq!(output(sh.execute_line(ADD_REGULAR)), "Regular member added successfully!");
        assert!(output(sh.execute_line(ADD_REGULAR)).starts_with("Error: A member with ID 1"));

        let text = output(sh.execute_line("show 1"));
        assert!(text.contains("Name: Ram Thapa"));
        assert!(text.contains("Start Date: 2025-01-01"));

        let json = output(sh.execute_line("show 1 --json"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "regular");
        assert_eq!(value["name"], "Ram Thapa");
    }

    #[test]
    fn test_show_premium_details() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        sh.execute_line(ADD_PREMIUM);
        sh.execute_line("pay 2 1000");

        let text = output(sh.execute_line("show 2"));
        assert!(text.starts_with("Premium Member #2\n  Name: Sita"));
        assert!(text.contains("  Personal Trainer: Coach Hari"));
        assert!(text.contains("  Paid Amount: £1000.00"));
        assert!(text.ends_with("  Discount: £0.00"));

        sh.execute_line(ADD_REGULAR);
        let all = output(sh.execute_line("show"));
        assert_eq!(all.matches(" Member #").count(), 2);
        assert!(all.contains("\n\nRegular Member #1"));
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);

        assert_eq!(output(sh.execute_line("activate 9")), "Error: No member found with ID: 9");
        assert!(!output(sh.execute_line("frobnicate")).is_empty());
        assert!(output(sh.execute_line("revert 1 'unterminated")).starts_with("Error:"));
        assert_eq!(output(sh.execute_line("   ")), "");
        assert_eq!(sh.execute_line("exit"), Flow::Exit);
    }

    #[test]
    fn test_payment_commands() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        sh.execute_line(ADD_REGULAR);
        sh.execute_line(ADD_PREMIUM);

        assert!(output(sh.execute_line("pay 1 100")).starts_with("Error: Member 1 is not a premium"));
        assert_eq!(
            output(sh.execute_line("pay 2 50000")),
            "Payment successful. Remaining amount to be paid: 0.00"
        );
        assert_eq!(
            output(sh.execute_line("premium-discount 2")),
            "Full payment discount: £5000.00"
        );
        assert!(output(sh.execute_line("settle 1")).starts_with("Error: Membership of member 1"));
        assert!(output(sh.execute_line("settle 1 --activate")).contains("Loyalty Points Earned: 650"));
        assert!(output(sh.execute_line("upgrade 1 basic")).contains("already subscribed"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);

        assert_eq!(output(sh.execute_line("save")), "Error: No members to save!");
        assert!(output(sh.execute_line("load")).starts_with("No member files found!"));

        sh.execute_line(ADD_REGULAR);
        sh.execute_line(ADD_PREMIUM);
        assert!(output(sh.execute_line("save")).starts_with("Data saved successfully!"));

        assert!(output(sh.execute_line("load")).contains("load --force"));
        let report = output(sh.execute_line("load --force"));
        assert!(report.contains("Regular Members: 1 loaded"));
        assert!(report.contains("Total Members Loaded: 2"));
        assert_eq!(sh.roster().len(), 2);
    }

    #[test]
    fn test_run_loop() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        let input = format!("{ADD_REGULAR}\nattend 1\nquit\nattend 1\n");
        let mut out = Vec::new();

        sh.run(input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Attendance marked successfully! Total visits: 1"));
        assert_eq!(sh.roster().find(1).unwrap().attendance(), 1);
    }
}
