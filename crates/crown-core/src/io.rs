//! Edge-list ingestion and output files

use crate::error::{CrownError, Result};
use crate::graph::Graph;
use crate::kernel::Kernel;
use crate::config::OutputConfig;
use crate::model::{Edge, Vertex};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

/// Parse `u v` lines into a graph. Blank lines are skipped; both endpoints of
/// every edge become vertices, repeated edges are no-ops.
pub fn parse_edge_list<R: BufRead>(reader: R, source_name: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut duplicates = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let number = number + 1;
        let line = line.map_err(|e| CrownError::FileUnreadable {
            path: PathBuf::from(source_name),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let (a, b) = parse_pair(&line)
            .map_err(|reason| CrownError::malformed(source_name, number, &line, reason))?;
        if a == b {
            return Err(CrownError::malformed(source_name, number, &line, "self-loop"));
        }

        graph.add_vertex(a);
        graph.add_vertex(b);
        if !graph.add_edge(a, b)? {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        tracing::warn!("{}: ignored {} duplicate edges", source_name, duplicates);
    }
    tracing::debug!(
        "Parsed {}: {} vertices, {} edges",
        source_name,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn parse_pair(line: &str) -> std::result::Result<(Vertex, Vertex), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [a, b] = tokens.as_slice() else {
        return Err(format!("expected 2 integers, found {} tokens", tokens.len()));
    };
    Ok((parse_vertex(a)?, parse_vertex(b)?))
}

fn parse_vertex(token: &str) -> std::result::Result<Vertex, String> {
    token
        .parse::<u32>()
        .map(Vertex)
        .map_err(|e| format!("{:?} is not a vertex id: {}", token, e))
}

/// Open a file for reading, mapping a missing file to `FileNotFound`.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CrownError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CrownError::FileUnreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Read an edge-list file.
pub fn read_graph(path: &Path) -> Result<Graph> {
    let reader = open_input(path)?;
    parse_edge_list(reader, &path.display().to_string())
}

/// Candidate vertex covers, one whitespace-separated list per line. Blank
/// lines are empty candidates.
pub fn parse_candidates<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<Vec<Vertex>>> {
    let mut candidates = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CrownError::FileUnreadable {
            path: PathBuf::from(source_name),
            source: e,
        })?;
        let candidate = line
            .split_whitespace()
            .map(parse_vertex)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|reason| CrownError::malformed(source_name, number + 1, &line, reason))?;
        candidates.push(candidate);
    }
    Ok(candidates)
}

/// One vertex per line.
pub fn write_vertices<W, I>(writer: &mut W, vertices: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Vertex>,
{
    for v in vertices {
        writeln!(writer, "{}", v)?;
    }
    Ok(())
}

/// One `u v` pair per line, ascending.
pub fn write_edge_list<W: Write>(writer: &mut W, graph: &Graph) -> std::io::Result<()> {
    write_edges(writer, graph.edges())
}

pub fn write_edges<W, I>(writer: &mut W, edges: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Edge>,
{
    for edge in edges {
        writeln!(writer, "{}", edge)?;
    }
    Ok(())
}

/// A file being written next to its destination, persisted only on commit.
struct StagedFile {
    target: PathBuf,
    file: NamedTempFile,
}

/// An output moved into place, holding whatever file it replaced until the
/// whole batch is committed.
struct Committed {
    target: PathBuf,
    replaced: Option<(TempDir, PathBuf)>,
}

fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl StagedFile {
    fn create(target: &Path) -> Result<Self> {
        if target.is_dir() {
            return Err(unwritable(target, ErrorKind::IsADirectory.into()));
        }
        let file = NamedTempFile::new_in(parent_dir(target)).map_err(|e| unwritable(target, e))?;
        Ok(StagedFile {
            target: target.to_path_buf(),
            file,
        })
    }

    fn write_with<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> std::io::Result<()>,
    {
        let mut writer = BufWriter::new(self.file.as_file_mut());
        fill(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| unwritable(&self.target, e))
    }

    /// Move the staged file into place. An existing target is set aside so
    /// [`Committed::rollback`] can put it back.
    fn commit(self) -> Result<Committed> {
        let StagedFile { target, file } = self;
        let replaced = set_aside(&target)?;
        match file.persist(&target) {
            Ok(_) => Ok(Committed { target, replaced }),
            Err(e) => {
                if replaced.is_some() {
                    Committed {
                        target: target.clone(),
                        replaced,
                    }
                    .rollback();
                }
                Err(unwritable(&target, e.error))
            }
        }
    }
}

/// Move an existing file target into a fresh backup directory beside it.
fn set_aside(target: &Path) -> Result<Option<(TempDir, PathBuf)>> {
    if !target.is_file() {
        return Ok(None);
    }
    let backup = tempfile::Builder::new()
        .prefix(".crown-backup")
        .tempdir_in(parent_dir(target))
        .map_err(|e| unwritable(target, e))?;
    let previous = backup.path().join("previous");
    std::fs::rename(target, &previous).map_err(|e| unwritable(target, e))?;
    Ok(Some((backup, previous)))
}

impl Committed {
    /// Restore the replaced file, or remove the new one if nothing was there.
    fn rollback(self) {
        let restored = match &self.replaced {
            Some((_, previous)) => std::fs::rename(previous, &self.target),
            None => std::fs::remove_file(&self.target),
        };
        if let Err(e) = restored {
            tracing::warn!("Cannot roll back {}: {}", self.target.display(), e);
        }
    }
}

fn unwritable(path: &Path, source: std::io::Error) -> CrownError {
    CrownError::FileUnwritable {
        path: path.to_path_buf(),
        source,
    }
}

/// Write one output file through a staged temporary file.
pub fn write_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> std::io::Result<()>,
{
    let mut staged = StagedFile::create(path)?;
    staged.write_with(fill)?;
    staged.commit().map(|_| ())
}

/// Write the crown file, the reduced graph file and the optional JSON report.
/// Every file is fully staged before any is moved into place; if a later move
/// fails, earlier ones are rolled back and any files they replaced restored.
pub fn write_outputs(kernel: &Kernel, output: &OutputConfig) -> Result<()> {
    let mut crown = StagedFile::create(&output.crown_path)?;
    crown.write_with(|w| write_vertices(w, kernel.cover.iter().copied()))?;

    let mut reduced = StagedFile::create(&output.reduced_path)?;
    reduced.write_with(|w| write_edge_list(w, &kernel.residual))?;

    let report = match &output.report_path {
        Some(path) => {
            let mut staged = StagedFile::create(path)?;
            let report = kernel.report();
            staged.write_with(|w| {
                serde_json::to_writer_pretty(&mut *w, &report).map_err(std::io::Error::from)?;
                writeln!(w)
            })?;
            Some(staged)
        }
        None => None,
    };

    let staged = [Some(crown), Some(reduced), report];
    commit_all(staged.into_iter().flatten())?;

    tracing::info!(
        "Wrote {} cover vertices to {} and {} residual edges to {}",
        kernel.cover.len(),
        output.crown_path.display(),
        kernel.residual.edge_count(),
        output.reduced_path.display()
    );
    Ok(())
}

fn commit_all(staged: impl IntoIterator<Item = StagedFile>) -> Result<()> {
    let mut committed: Vec<Committed> = Vec::new();
    for file in staged {
        match file.commit() {
            Ok(done) => committed.push(done),
            Err(e) => {
                for done in committed.into_iter().rev() {
                    done.rollback();
                }
                return Err(e);
            }
        }
    }
    Ok(())
}
