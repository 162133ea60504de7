//! End-to-end conversion tests over real files on disk

use psitab_ingest::batch::{run_batch, BatchOptions};
use std::path::{Path, PathBuf};

/// PSI MI XML with separate experiment and interactor lists,
/// cross-linked through *Ref elements
const EXPLICIT_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<entrySet>
  <entry id="E1">
    <experimentList>
      <experimentDescription id="EXP1">
        <names><shortLabel>two hybrid</shortLabel></names>
        <hostOrganismList>
          <hostOrganism ncbiTaxId="4932"/>
        </hostOrganismList>
      </experimentDescription>
    </experimentList>
    <interactorList>
      <interactor id="X1">
        <names>
          <shortLabel>abc1</shortLabel>
          <alias type="gene name">ABC1</alias>
        </names>
        <xref>
          <primaryRef id="P04637" db="uniprotkb" dbAc="MI:0486"/>
        </xref>
        <organism ncbiTaxId="9606"/>
      </interactor>
    </interactorList>
    <interactionList>
      <interaction id="I1">
        <experimentList>
          <experimentRef>EXP1</experimentRef>
        </experimentList>
        <participantList>
          <participant id="ignored">
            <interactorRef>X1</interactorRef>
          </participant>
        </participantList>
      </interaction>
    </interactionList>
  </entry>
</entrySet>
"#;

/// PSI MI XML with experiment and interactor details embedded in the
/// interaction, making the relationships implicit
const IMPLICIT_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<entrySet>
  <entry id="E2">
    <interactionList>
      <interaction id="I2">
        <experimentList>
          <experimentDescription id="EXP2">
            <names><fullName>affinity chromatography</fullName></names>
          </experimentDescription>
        </experimentList>
        <participantList>
          <participant>
            <interactor id="reused">
              <names><shortLabel>def2</shortLabel></names>
              <organism ncbiTaxId="10090"/>
            </interactor>
          </participant>
        </participantList>
      </interaction>
    </interactionList>
  </entry>
</entrySet>
"#;

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn relation_lines(dir: &Path, relation: &str) -> Vec<String> {
    std::fs::read_to_string(dir.join(format!("{relation}.txt")))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn explicit_document_produces_reference_based_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "explicit.xml", EXPLICIT_DOC);
    let out = dir.path().join("tables");
    let label = input.display().to_string();

    let summary = run_batch(&out, "TEST", &[input], &BatchOptions::default()).unwrap();
    assert_eq!(summary.files_processed, 1);

    // Experiment linked to the interaction through the reference only
    assert_eq!(
        relation_lines(&out, "experiment"),
        vec![format!("TEST\t{label}\tE1\tEXP1\tI1")]
    );

    // Exactly one interactor row, tagged explicit, with the transient
    // participant identifier
    assert_eq!(
        relation_lines(&out, "interactor"),
        vec![format!("TEST\t{label}\tE1\tX1\texplicit\t0\tI1")]
    );

    let names = relation_lines(&out, "names");
    assert!(names.contains(&format!(
        "TEST\t{label}\tE1\texperimentDescription\tEXP1\texplicit\texperimentDescription\tshortLabel\t\\N\t\\N\ttwo hybrid"
    )));
    assert!(names.contains(&format!(
        "TEST\t{label}\tE1\tinteractor\tX1\texplicit\tinteractor\tshortLabel\t\\N\t\\N\tabc1"
    )));
    assert!(names.contains(&format!(
        "TEST\t{label}\tE1\tinteractor\tX1\texplicit\tinteractor\talias\tgene name\t\\N\tABC1"
    )));

    assert_eq!(
        relation_lines(&out, "xref"),
        vec![format!(
            "TEST\t{label}\tE1\tinteractor\tX1\texplicit\tinteractor\tprimaryRef\tP04637\tuniprotkb\tMI:0486\t\\N\t\\N"
        )]
    );

    let organisms = relation_lines(&out, "organisms");
    assert!(organisms.contains(&format!(
        "TEST\t{label}\tE1\tinteractor\tX1\texplicit\t9606"
    )));
    assert!(organisms.contains(&format!(
        "TEST\t{label}\tE1\texperimentDescription\tEXP1\texplicit\t4932"
    )));
}

#[test]
fn implicit_document_produces_nested_rows_with_transient_ids() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "implicit.xml", IMPLICIT_DOC);
    let out = dir.path().join("tables");
    let label = input.display().to_string();

    run_batch(&out, "TEST", &[input], &BatchOptions::default()).unwrap();

    // The embedded experimentDescription maps straight to the
    // interaction
    assert_eq!(
        relation_lines(&out, "experiment"),
        vec![format!("TEST\t{label}\tE2\tEXP2\tI2")]
    );

    // The embedded interactor is re-identified; its source id is never
    // trusted
    assert_eq!(
        relation_lines(&out, "interactor"),
        vec![format!("TEST\t{label}\tE2\t0\timplicit\t0\tI2")]
    );

    let names = relation_lines(&out, "names");
    assert!(names.contains(&format!(
        "TEST\t{label}\tE2\tinteractor\t0\timplicit\tinteractor\tshortLabel\t\\N\t\\N\tdef2"
    )));
    assert!(names.contains(&format!(
        "TEST\t{label}\tE2\texperimentDescription\tEXP2\texplicit\texperimentDescription\tfullName\t\\N\t\\N\taffinity chromatography"
    )));

    assert_eq!(
        relation_lines(&out, "organisms"),
        vec![format!("TEST\t{label}\tE2\tinteractor\t0\timplicit\t10090")]
    );
}

#[test]
fn batch_counters_span_documents() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_input(dir.path(), "a.xml", IMPLICIT_DOC);
    let second = write_input(dir.path(), "b.xml", IMPLICIT_DOC);
    let out = dir.path().join("tables");

    let summary = run_batch(&out, "TEST", &[first, second], &BatchOptions::default()).unwrap();
    assert_eq!(summary.files_processed, 2);

    let interactor = relation_lines(&out, "interactor");
    assert_eq!(interactor.len(), 2);
    // Second document's participant and interactor continue the counters
    assert!(interactor[0].contains("\t0\timplicit\t0\t"));
    assert!(interactor[1].contains("\t1\timplicit\t1\t"));
}
