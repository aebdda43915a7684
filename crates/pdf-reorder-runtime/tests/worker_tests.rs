use lopdf::{Dictionary, Document, Object, Stream};
use pdf_reorder_runtime::*;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;

fn write_test_pdf(num_pages: usize, path: &Path) {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(path, writer).unwrap();
}

fn process_command(input: &Path, output: &Path) -> ReorderCommand {
    let mut options = ReorderOptions::for_input(input);
    options.output_file = Some(output.to_path_buf());
    ReorderCommand::Process { options }
}

async fn next_update(rx: &mut mpsc::UnboundedReceiver<ReorderUpdate>) -> ReorderUpdate {
    tokio::time::timeout(Duration::from_secs(30), rx.recv())
        .await
        .expect("worker timed out")
        .expect("update channel closed")
}

#[tokio::test]
async fn test_process_reports_progress_then_success() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.pdf");
    let output = dir.path().join("out.pdf");
    write_test_pdf(3, &input);

    let (worker, mut updates) = spawn_worker();
    worker.send(process_command(&input, &output)).unwrap();

    match next_update(&mut updates).await {
        ReorderUpdate::Progress { message } => assert_eq!(message, "Processing..."),
        other => panic!("Expected progress, got {:?}", other),
    }
    let done = next_update(&mut updates).await;
    assert_eq!(done.outcome(), Some(ReorderOutcome::Success { page_count: 3 }));
    match done {
        ReorderUpdate::Complete { path, .. } => assert_eq!(path, output),
        other => panic!("Expected completion, got {:?}", other),
    }

    assert!(worker.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).await);
}

#[tokio::test]
async fn test_process_failure_is_a_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.pdf");
    let output = dir.path().join("out.pdf");
    write_test_pdf(0, &input);

    let (worker, mut updates) = spawn_worker();
    worker.send(process_command(&input, &output)).unwrap();

    assert!(next_update(&mut updates).await.outcome().is_none());
    assert_eq!(
        next_update(&mut updates).await.outcome(),
        Some(ReorderOutcome::Failure {
            message: "Source PDF is empty.".to_string()
        })
    );
    assert!(!output.exists());

    worker.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).await;
}

#[tokio::test]
async fn test_calculate_stats() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.pdf");
    write_test_pdf(2, &input);

    let (worker, mut updates) = spawn_worker();
    worker
        .send(ReorderCommand::CalculateStats {
            input_path: input.clone(),
        })
        .unwrap();

    match next_update(&mut updates).await {
        ReorderUpdate::StatsCalculated { stats } => {
            assert_eq!(stats.source_pages, 2);
            assert_eq!(stats.output_pages, 2);
            assert_eq!(stats.piles, vec![1..=2, 3..=4, 5..=6, 7..=8]);
        }
        other => panic!("Expected stats, got {:?}", other),
    }

    worker.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).await;
}

#[tokio::test]
async fn test_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("reorder.json");
    let mut saved = ReorderOptions::for_input("scan.pdf");
    saved.cut_lines = true;
    saved.save(&config).await.unwrap();

    let (worker, mut updates) = spawn_worker();
    worker.send(ReorderCommand::LoadConfig { path: config }).unwrap();

    match next_update(&mut updates).await {
        ReorderUpdate::ConfigLoaded { options } => assert_eq!(options, saved),
        other => panic!("Expected config, got {:?}", other),
    }

    worker.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).await;
}

#[tokio::test]
async fn test_updates_close_after_shutdown() {
    let (worker, mut updates) = spawn_worker();
    assert!(worker.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).await);
    // Worker dropped its sender on exit
    assert!(updates.recv().await.is_none());
}

#[tokio::test]
async fn test_run_folds_errors_into_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = ReorderOptions::for_input(dir.path().join("missing.pdf"));
    options.output_file = Some(dir.path().join("out.pdf"));

    assert_eq!(
        run(&options).await,
        ReorderOutcome::Failure {
            message: "Source file does not exist.".to_string()
        }
    );
}
