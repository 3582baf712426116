use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

pub mod driver;
pub mod dynamic_programming;
pub mod error;

pub use error::{Error, Result, SubsetSumError};

/// Line oriented input reader for the task inputs.
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Next line with surrounding whitespace removed. Returns an empty string at end of input.
    pub fn next_line(&mut self) -> Result<String> {
        let mut input = String::new();
        self.reader.read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Parse the whole next line as a single value.
    pub fn parse<T: FromStr>(&mut self) -> Result<T> {
        let line = self.next_line()?;
        parse_token(&line)
    }

    /// Parse the next line as whitespace separated values.
    pub fn parse_vec<T: FromStr>(&mut self) -> Result<Vec<T>> {
        let line = self.next_line()?;
        line.split_whitespace().map(parse_token).collect()
    }
}

fn parse_token<T: FromStr>(token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::Input(format!("could not parse {:?}", token)))
}

/// Output writer (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        // writing into a Vec cannot fail
        let _ = write!(self.0, "{}", value);
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        let _ = writeln!(self.0, "{}", value);
    }

    pub fn into_string(self) -> std::result::Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

pub type SolveFn = fn(&mut Scanner, &mut Writer) -> Result<()>;

/// A named category of problems, each addressable by name from the command line.
pub struct TaskGroup {
    category: &'static str,
    tasks: Vec<(&'static str, SolveFn)>,
}

impl TaskGroup {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, name: &'static str, solve: SolveFn) -> Self {
        self.tasks.push((name, solve));
        self
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, problem: &str) -> Result<SolveFn> {
        self.tasks
            .iter()
            .find(|(name, _)| *name == problem)
            .map(|(_, solve)| *solve)
            .ok_or_else(|| Error::UnknownProblem(format!("{}/{}", self.category, problem)))
    }

    /// Solve a single input read from stdin and write the answer to stdout.
    pub fn run(&self, problem: &str) -> Result<()> {
        let solve = self.get(problem)?;
        debug!("running {}/{} on stdin", self.category, problem);

        let mut scanner = Scanner::new(std::io::stdin().lock());
        let mut writer = Writer::new();
        solve(&mut scanner, &mut writer)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(writer.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Run the bundled data cases for a problem. Returns true when all of them pass.
    pub fn check(&self, problem: &str) -> Result<bool> {
        let solve = self.get(problem)?;
        let failed = testing::run_all_tests(self.category, problem, solve);
        Ok(failed == 0)
    }
}

/// Test utilities for running and verifying test cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::Instant;

    fn data_dir(category: &str, problem_name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(category)
            .join(problem_name)
    }

    /// Discover all test case numbers for a given problem
    pub fn discover_tests(category: &str, problem_name: &str) -> Vec<usize> {
        let test_dir = data_dir(category, problem_name);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(num) = entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(".in"))
                    .and_then(|num| num.parse::<usize>().ok())
                {
                    test_numbers.push(num);
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return (expected, actual, duration) output
    pub fn run_test_case(
        category: &str,
        problem_name: &str,
        test_num: usize,
        solve_fn: SolveFn,
    ) -> std::result::Result<(String, String, std::time::Duration), String> {
        let test_dir = data_dir(category, problem_name);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer).map_err(|e| e.to_string())?;
        let duration = start.elapsed();

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            expected.trim().to_string(),
            actual.trim().to_string(),
            duration,
        ))
    }

    /// Verify all test cases for a problem
    pub fn verify_all_tests(category: &str, problem_name: &str, solve_fn: SolveFn) {
        let test_cases = discover_tests(category, problem_name);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}/{}",
            category,
            problem_name
        );

        for test_num in test_cases {
            match run_test_case(category, problem_name, test_num, solve_fn) {
                Ok((expected, actual, duration)) => {
                    assert_eq!(
                        actual,
                        expected,
                        "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        test_num,
                        duration.as_secs_f64(),
                        expected,
                        actual
                    );
                }
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }
    }

    /// Run all test cases and print results (for CLI usage). Returns the number of failures.
    pub fn run_all_tests(category: &str, problem_name: &str, solve_fn: SolveFn) -> usize {
        let test_cases = discover_tests(category, problem_name);
        if test_cases.is_empty() {
            println!("No test cases found for {}/{}", category, problem_name);
            return 0;
        }

        println!(
            "Running {} test cases for {}/{}...",
            test_cases.len(),
            category,
            problem_name
        );

        let mut passed = 0;
        let mut failed = 0;
        let mut total_duration = std::time::Duration::ZERO;

        for test_num in &test_cases {
            match run_test_case(category, problem_name, *test_num, solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                        passed += 1;
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    failed += 1;
                }
            }
        }

        println!("\nResults: {} passed, {} failed", passed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> Scanner {
        Scanner::new(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_scanner_parses_lines() {
        let mut input = scanner("3 7\n1 2 -4\n");
        assert_eq!(input.parse_vec::<i64>().unwrap(), vec![3, 7]);
        assert_eq!(input.parse_vec::<i64>().unwrap(), vec![1, 2, -4]);
        // end of input reads as an empty line
        assert!(input.parse_vec::<i64>().unwrap().is_empty());
    }

    #[test]
    fn test_scanner_rejects_garbage() {
        let mut input = scanner("3 x\n");
        assert!(matches!(input.parse_vec::<i64>(), Err(Error::Input(_))));
    }

    #[test]
    fn test_task_group_lookup() {
        let group = dynamic_programming::tasks();
        assert!(group.get("min_count_subset_sum").is_ok());
        assert!(matches!(
            group.get("nope"),
            Err(Error::UnknownProblem(name)) if name == "dynamic_programming/nope"
        ));
    }
}
