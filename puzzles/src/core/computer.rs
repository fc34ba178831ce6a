//! Three-bit computer: three registers and eight opcodes.
//!
//! Each instruction is an opcode followed by an operand, both in `0..=7`.
//! Literal operands are used as-is; combo operands `0..=3` are literal, `4`,
//! `5` and `6` read registers A, B and C, and `7` is reserved.

use anyhow::{Context, Result, bail};

/// Instructions executed before a run is abandoned as non-halting.
pub const MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    /// Initial values of A, B and C.
    pub registers: [u64; 3],
    pub program: Vec<u8>,
}

/// `Register A: n`, `Register B: n`, `Register C: n`, then `Program: x,y,...`.
pub fn parse_computer(input: &str) -> Result<Computer> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut registers = [0u64; 3];
    for (slot, name) in ["A", "B", "C"].into_iter().enumerate() {
        let (line_no, line) = lines
            .next()
            .with_context(|| format!("missing register {name}"))?;
        let value = line
            .strip_prefix(&format!("Register {name}:"))
            .with_context(|| format!("line {line_no}: expected 'Register {name}: <value>'"))?
            .trim();
        registers[slot] = value
            .parse::<u64>()
            .with_context(|| format!("line {line_no}: invalid register value '{value}'"))?;
    }

    let (line_no, line) = lines.next().context("missing program line")?;
    let program = line
        .strip_prefix("Program:")
        .with_context(|| format!("line {line_no}: expected 'Program: <codes>'"))?
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u8>()
                .ok()
                .filter(|code| *code < 8)
                .with_context(|| format!("line {line_no}: invalid 3-bit code '{token}'"))
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(Computer { registers, program })
}

/// Comma-joined output values.
pub fn render_output(output: &[u8]) -> String {
    output
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn shift_right(value: u64, by: u64) -> u64 {
    u32::try_from(by)
        .ok()
        .and_then(|by| value.checked_shr(by))
        .unwrap_or(0)
}

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;

fn combo(operand: u8, registers: &[u64; 3], ip: usize) -> Result<u64> {
    match operand {
        0..=3 => Ok(u64::from(operand)),
        4..=6 => Ok(registers[usize::from(operand - 4)]),
        _ => bail!("reserved combo operand {operand} at position {ip}"),
    }
}

impl Computer {
    /// Output of the program with its initial registers.
    pub fn output(&self) -> Result<Vec<u8>> {
        self.run(self.registers[A])
    }

    /// Run the program with register A set to `a`.
    ///
    /// The machine halts when the instruction pointer leaves the program or
    /// lands on an opcode with no operand after it.
    pub fn run(&self, a: u64) -> Result<Vec<u8>> {
        let mut registers = self.registers;
        registers[A] = a;
        let mut ip = 0;
        let mut output = Vec::new();

        for _ in 0..MAX_STEPS {
            let (Some(&opcode), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1))
            else {
                return Ok(output);
            };
            let literal = u64::from(operand);
            match opcode {
                0 => {
                    let by = combo(operand, &registers, ip)?;
                    registers[A] = shift_right(registers[A], by);
                }
                1 => registers[B] ^= literal,
                2 => registers[B] = combo(operand, &registers, ip)? % 8,
                3 if registers[A] != 0 => {
                    ip = usize::from(operand);
                    continue;
                }
                3 => {}
                4 => registers[B] ^= registers[C],
                5 => output.push((combo(operand, &registers, ip)? % 8) as u8),
                6 => {
                    let by = combo(operand, &registers, ip)?;
                    registers[B] = shift_right(registers[A], by);
                }
                7 => {
                    let by = combo(operand, &registers, ip)?;
                    registers[C] = shift_right(registers[A], by);
                }
                _ => bail!("invalid opcode {opcode} at position {ip}"),
            }
            ip += 2;
        }
        bail!("program did not halt within {MAX_STEPS} instructions")
    }

    /// Lowest positive value of register A that makes the program print
    /// itself.
    ///
    /// Builds A three bits at a time, matching ever longer suffixes of the
    /// program. This finds the answer for programs that consume A three bits
    /// per output, which is how such programs are written.
    pub fn lowest_quine(&self) -> Result<Option<u64>> {
        let mut candidates = vec![0u64];
        for matched in 1..=self.program.len() {
            let suffix = &self.program[self.program.len() - matched..];
            let mut next = Vec::new();
            for &prefix in &candidates {
                for digit in 0..8 {
                    let Some(a) = prefix.checked_mul(8).and_then(|a| a.checked_add(digit)) else {
                        continue;
                    };
                    if self.run(a)? == suffix {
                        next.push(a);
                    }
                }
            }
            next.sort_unstable();
            next.dedup();
            candidates = next;
        }
        Ok(candidates.into_iter().find(|&a| a > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::COMPUTER_SAMPLE;

    fn computer(registers: [u64; 3], program: &[u8]) -> Computer {
        Computer {
            registers,
            program: program.to_vec(),
        }
    }

    #[test]
    fn sample_output() {
        let computer = parse_computer(COMPUTER_SAMPLE).expect("parse");
        assert_eq!(computer.registers, [729, 0, 0]);
        let output = computer.output().expect("run");
        assert_eq!(render_output(&output), "4,6,3,5,6,3,5,2,1,0");
    }

    #[test]
    fn small_programs() {
        assert_eq!(
            computer([10, 0, 0], &[5, 0, 5, 1, 5, 4])
                .output()
                .expect("run"),
            vec![0, 1, 2]
        );
        let output = computer([2024, 0, 0], &[0, 1, 5, 4, 3, 0])
            .output()
            .expect("run");
        assert_eq!(render_output(&output), "4,2,5,6,7,7,7,7,3,1,0");
        assert_eq!(
            computer([0, 29, 0], &[1, 7, 5, 5]).output().expect("run"),
            vec![2]
        );
    }

    #[test]
    fn finds_lowest_self_replicating_register() {
        let quine = computer([2024, 0, 0], &[0, 3, 5, 4, 3, 0]);
        let a = quine.lowest_quine().expect("search");
        assert_eq!(a, Some(117_440));
        assert_eq!(quine.run(117_440).expect("run"), quine.program);
    }

    #[test]
    fn sample_program_never_prints_itself() {
        let computer = parse_computer(COMPUTER_SAMPLE).expect("parse");
        assert_eq!(computer.lowest_quine().expect("search"), None);
    }

    #[test]
    fn reserved_operand_and_endless_loops_are_errors() {
        let err = computer([1, 0, 0], &[5, 7]).output().expect_err("reserved");
        assert!(err.to_string().contains("reserved combo operand 7"));

        let err = computer([1, 0, 0], &[3, 0]).output().expect_err("loops");
        assert!(err.to_string().contains("did not halt"));
    }

    #[test]
    fn parse_rejects_codes_outside_three_bits() {
        let input = "Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 0,8\n";
        let err = parse_computer(input).expect_err("should fail");
        assert!(err.to_string().contains("invalid 3-bit code '8'"));
    }
}
