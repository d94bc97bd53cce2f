/*! Mystem lemma tagger

Runs the [mystem](https://yandex.ru/dev/mystem/) executable on the provided text
and reads its JSON output.

Mystem prints one JSON array per input line, each item being a surface token
(words, but also spaces and punctuation) with its (possibly empty) list of analyses.
!*/
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use super::{LemmaAnalysis, LemmaTagger};
use crate::error::Error;

/// copy whole input (-c), grammar info (-i), disambiguation (-d), glued grammar (-g)
const MYSTEM_ARGS: [&str; 6] = ["-c", "-i", "-d", "-g", "--format", "json"];

pub struct Mystem {
    bin: PathBuf,
}

impl Mystem {
    pub fn new(bin: &Path) -> Self {
        Self {
            bin: bin.to_path_buf(),
        }
    }

    /// Parse mystem output, one JSON array per line.
    pub fn parse_output(output: &str) -> Result<Vec<LemmaAnalysis>, Error> {
        let mut analyses = Vec::new();
        for line in output.lines().filter(|line| !line.trim().is_empty()) {
            let items: Vec<LemmaAnalysis> = serde_json::from_str(line)?;
            analyses.extend(items);
        }
        Ok(analyses)
    }
}

impl Default for Mystem {
    /// Use the `mystem` found in `PATH`.
    fn default() -> Self {
        Self::new(Path::new("mystem"))
    }
}

impl LemmaTagger for Mystem {
    fn analyze(&self, text: &str) -> Result<Vec<LemmaAnalysis>, Error> {
        debug!("running {:?} on {} bytes", self.bin, text.len());
        let mut child = Command::new(&self.bin)
            .args(MYSTEM_ARGS)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Tagger(format!("could not run {:?}: {}", self.bin, e)))?;

        // feed stdin from another thread so that a full stdout pipe can't block us
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Tagger("mystem stdin unavailable".to_string()))?;
        let input = format!("{}\n", text);
        let feeder = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let fed = feeder
            .join()
            .map_err(|_| Error::Tagger("mystem input thread panicked".to_string()))?;

        // a failing mystem may stop reading its input: exit status comes first
        if !output.status.success() {
            return Err(Error::Tagger(format!(
                "mystem exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }
        match fed {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                return Err(Error::Tagger(format!(
                    "mystem stopped reading its input: {}",
                    String::from_utf8_lossy(&output.stderr)
                )))
            }
            fed => fed?,
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::Tagger(format!("mystem output is not UTF-8: {}", e)))?;
        Self::parse_output(&stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_output() {
        let output = r#"[{"analysis":[{"lex":"мама","wt":1,"gr":"S,жен,од=им,ед"}],"text":"Мама"},{"text":" "},{"analysis":[{"lex":"мыть","wt":1,"gr":"V,несов,пе=прош,ед,изъяв,жен"}],"text":"мыла"},{"text":"."},{"text":"\n"}]
"#;
        let analyses = Mystem::parse_output(output).unwrap();

        assert_eq!(analyses.len(), 5);
        assert_eq!(analyses[0].surface(), Some("Мама"));
        assert_eq!(
            analyses[2].analysis[0].lemma_and_tag(),
            Some(("мыть", "V,несов,пе=прош,ед,изъяв,жен"))
        );
        assert!(analyses[3].analysis.is_empty());
    }

    #[test]
    fn parse_multiline_output() {
        let output = "[{\"text\":\"раз\",\"analysis\":[]}]\n\n[{\"text\":\"два\",\"analysis\":[]}]\n";
        let analyses = Mystem::parse_output(output).unwrap();
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[1].surface(), Some("два"));
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            Mystem::parse_output("not json"),
            Err(Error::Serde(_))
        ));
    }

    /// Write an executable shell script standing in for mystem.
    #[cfg(unix)]
    fn fake_mystem(dir: &Path, body: &str) -> PathBuf {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let bin = dir.join("mystem");
        fs::write(&bin, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        bin
    }

    #[cfg(unix)]
    #[test]
    fn fake_binary_output() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_mystem(
            dir.path(),
            r#"cat > /dev/null; echo '[{"analysis":[{"lex":"мама","gr":"S"}],"text":"мама"}]'"#,
        );
        let analyses = Mystem::new(&bin).analyze("мама").unwrap();
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].analysis[0].lemma_and_tag(), Some(("мама", "S")));
    }

    #[cfg(unix)]
    #[test]
    fn failure_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_mystem(dir.path(), "echo 'bad dictionary' >&2; exit 3");
        let m = Mystem::new(&bin);

        // small input fits in the pipe, large input gets cut by the early exit
        for text in ["мама".to_string(), "мама мыла раму ".repeat(20_000)] {
            match m.analyze(&text) {
                Err(Error::Tagger(reason)) => {
                    assert!(reason.contains("bad dictionary"), "{}", reason)
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn missing_binary() {
        let m = Mystem::new(Path::new("/nonexistent/mystem-binary"));
        assert!(matches!(m.analyze("мама"), Err(Error::Tagger(_))));
    }
}
