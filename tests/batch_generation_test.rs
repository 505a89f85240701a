use banktxt::{BatchEngine, BatchError, BatchPipeline, CliConfig, LocalStorage, WorkbookDecoder};
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

fn write_workbook(dir: &TempDir, headers: &[&str], rows: &[Vec<(&str, &str)>]) -> String {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        for (header, value) in row {
            let col = headers
                .iter()
                .position(|h| h == header)
                .expect("unknown header") as u16;
            sheet.write_string((i + 1) as u32, col, *value).unwrap();
        }
    }

    let path = dir.path().join("pagos.xlsx");
    workbook.save(&path).unwrap();
    path.to_str().unwrap().to_string()
}

async fn run(input_path: String, output_dir: &TempDir) -> Result<String, BatchError> {
    let output_path = output_dir.path().to_str().unwrap().to_string();
    let config = CliConfig {
        input_path,
        output_path: output_path.clone(),
        verbose: false,
    };

    let storage = LocalStorage::new(output_path);
    let pipeline = BatchPipeline::new(storage, config, WorkbookDecoder::new(), export_date());
    let engine = BatchEngine::new(pipeline);

    engine.run().await
}

const HEADERS: [&str; 3] = ["Numero de Cuenta", "Importe", "Nombre"];

#[tokio::test]
async fn test_end_to_end_batch_generation() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let input = write_workbook(
        &input_dir,
        &HEADERS,
        &[
            vec![
                ("Numero de Cuenta", "1234567890"),
                ("Importe", "1000"),
                ("Nombre", "Juan Perez"),
            ],
            // Missing name: skipped, leaves a gap in the sequence numbers.
            vec![("Numero de Cuenta", "2222222222"), ("Importe", "50")],
            vec![
                ("Numero de Cuenta", "3333333333"),
                ("Importe", "1234,56"),
                ("Nombre", "María Ñúñez"),
            ],
        ],
    );

    let output_path = run(input, &output_dir).await.unwrap();
    assert!(output_path.ends_with("LOTE_BANCARIO_2024-05-17.txt"));

    let written = output_dir.path().join("LOTE_BANCARIO_2024-05-17.txt");
    let text = std::fs::read_to_string(&written).unwrap();

    assert!(text.ends_with("\r\n"));
    let lines: Vec<&str> = text.trim_end_matches("\r\n").split("\r\n").collect();
    assert_eq!(lines.len(), 2);

    for line in &lines {
        assert_eq!(line.chars().count(), 108);
        assert_eq!(&line[25..27], "99");
        assert_eq!(&line[102..108], "001001");
    }

    // Sequence numbers reflect original row positions, not output order.
    assert_eq!(&lines[0][0..9], "000000001");
    assert_eq!(&lines[1][0..9], "000000003");

    assert!(lines[0][27..47].starts_with("1234567890"));
    assert_eq!(&lines[0][47..62], "000000000100000");
    assert!(lines[0][62..102].starts_with("JUAN PEREZ "));

    assert_eq!(&lines[1][47..62], "000000000123456");
    assert!(lines[1][62..102].starts_with("MARIA NUNEZ "));
}

#[tokio::test]
async fn test_missing_amount_column_fails_typed() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let input = write_workbook(
        &input_dir,
        &["Numero de Cuenta", "Nombre"],
        &[vec![
            ("Numero de Cuenta", "1234567890"),
            ("Nombre", "Juan Perez"),
        ]],
    );

    match run(input, &output_dir).await.unwrap_err() {
        BatchError::MissingColumns { columns } => {
            assert_eq!(columns, vec!["Importe".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }

    // No partial output on failure.
    assert!(!output_dir
        .path()
        .join("LOTE_BANCARIO_2024-05-17.txt")
        .exists());
}

#[tokio::test]
async fn test_all_rows_skipped_fails_typed() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let input = write_workbook(
        &input_dir,
        &HEADERS,
        &[
            vec![
                ("Numero de Cuenta", "1"),
                ("Importe", "N/A"),
                ("Nombre", "Ana"),
            ],
            vec![
                ("Numero de Cuenta", "2"),
                ("Importe", "pendiente"),
                ("Nombre", "Luis"),
            ],
            vec![
                ("Numero de Cuenta", "3"),
                ("Importe", "-10,00"),
                ("Nombre", "Eva"),
            ],
        ],
    );

    match run(input, &output_dir).await.unwrap_err() {
        BatchError::NoValidRows { skipped } => assert_eq!(skipped, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_header_only_sheet_is_empty_dataset() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let input = write_workbook(&input_dir, &HEADERS, &[]);

    let err = run(input, &output_dir).await.unwrap_err();
    assert!(matches!(err, BatchError::EmptyDataset));
}

#[tokio::test]
async fn test_unreadable_payload_fails_typed() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let path = input_dir.path().join("pagos.xlsx");
    std::fs::write(&path, b"definitely not a workbook").unwrap();

    let err = run(path.to_str().unwrap().to_string(), &output_dir).await.unwrap_err();
    assert!(matches!(err, BatchError::UnreadablePayload { .. }));
}

#[tokio::test]
async fn test_wrong_extension_rejected_before_decoding() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let path = input_dir.path().join("pagos.csv");
    std::fs::write(&path, b"cuenta,importe,nombre").unwrap();

    match run(path.to_str().unwrap().to_string(), &output_dir).await.unwrap_err() {
        BatchError::InvalidFileType { extension } => assert_eq!(extension, "csv"),
        other => panic!("unexpected error: {other}"),
    }
}
