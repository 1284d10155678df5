#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use sin_dashboard::models::{
        cost::{CostPage, CostRecord},
        energy::{EnergyPage, EnergyRecord},
        error::AppError,
        monthly::{MonthlyRecord, chart_series, month_labels, monthly_means},
        query::{DateRangeQuery, PageCursor},
    };

    // Helper function to parse a test date
    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // Helper function to create an energy record; the generation fields are
    // fixed multiples of `eolica` so every metric mean is easy to predict
    fn create_energy_record(day: &str, eolica: f64) -> EnergyRecord {
        EnergyRecord {
            id_subsistema: "NE".to_string(),
            subsistema_nome: Some("NORDESTE".to_string()),
            data: date(day),
            hora: None,
            geracao_eolica: Some(eolica),
            geracao_termica: Some(eolica * 2.0),
            geracao_solar: Some(eolica * 0.5),
            geracao_hidraulica: Some(eolica * 4.0),
            valor_carga: 11_000.0,
            valor_intercambio: -1_250.0,
        }
    }

    // Helper function to create a cost record around a base value
    fn create_cost_record(day: &str, base: f64) -> CostRecord {
        CostRecord {
            id_subsistema: "SE".to_string(),
            subsistema_nome: Some("SUDESTE".to_string()),
            data: date(day),
            custo_marginal_operacao_semanal: base,
            custo_marginal_operacao_semanal_carga_leve: base - 20.0,
            custo_marginal_operacao_semanal_carga_media: base,
            custo_marginal_operacao_semanal_carga_pesada: base + 20.0,
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Failed to parse response".to_string());
        assert_eq!(error.to_string(), "Data error: Failed to parse response");
    }

    #[test]
    fn test_app_error_auth_display() {
        let error = AppError::AuthError("Token exchange rejected".to_string());
        assert_eq!(error.to_string(), "Authentication error: Token exchange rejected");
    }

    #[test]
    fn test_app_error_not_found_display() {
        let error = AppError::NotFound("HTTP 404 from /cmo/semanal".to_string());
        assert_eq!(error.to_string(), "Not found: HTTP 404 from /cmo/semanal");
    }

    // ===== Energy Model Tests =====

    #[test]
    fn test_energy_page_deserialization() {
        let json = r#"{
            "total_registros": 250,
            "data_inicial": "2024-01-01",
            "data_final": "2024-01-31",
            "dados": [
                {
                    "id_subsistema": "NE",
                    "subsistema_nome": "NORDESTE",
                    "data": "2024-01-05",
                    "hora": "13:00:00",
                    "geracao_eolica": 9344.6,
                    "geracao_termica": 1290.1,
                    "geracao_solar": 2444.9,
                    "geracao_hidraulica": 3077.4,
                    "valor_carga": 12288.3,
                    "valor_intercambio": -3868.7
                }
            ]
        }"#;

        let page: Result<EnergyPage, _> = serde_json::from_str(json);
        assert!(page.is_ok());

        let page = page.unwrap();
        assert_eq!(page.total_registros, 250);
        assert_eq!(page.data_inicial, date("2024-01-01"));
        assert_eq!(page.data_final, date("2024-01-31"));
        assert_eq!(page.dados.len(), 1);

        let record = &page.dados[0];
        assert_eq!(record.id_subsistema, "NE");
        assert_eq!(record.data, date("2024-01-05"));
        assert_eq!(record.hora, NaiveTime::from_hms_opt(13, 0, 0));
        assert_eq!(record.geracao_eolica, Some(9344.6));
        assert_eq!(record.valor_carga, 12288.3);
        assert_eq!(record.valor_intercambio, -3868.7);
    }

    #[test]
    fn test_energy_record_missing_generation_fields() {
        let json = r#"{
            "id_subsistema": "S",
            "data": "2024-02-10",
            "geracao_solar": null,
            "geracao_hidraulica": 5120.8,
            "valor_carga": 9800.0,
            "valor_intercambio": 312.5
        }"#;

        let record: EnergyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.subsistema_nome, None);
        assert_eq!(record.hora, None);
        assert_eq!(record.geracao_eolica, None);
        assert_eq!(record.geracao_solar, None);
        assert_eq!(record.geracao_hidraulica, Some(5120.8));

        // Absent generation surfaces as NaN at the metric level
        assert!((EnergyRecord::METRICS[0].value)(&record).is_nan());
        assert_eq!((EnergyRecord::METRICS[3].value)(&record), 5120.8);
    }

    #[test]
    fn test_energy_metric_labels() {
        let labels: Vec<&str> = EnergyRecord::METRICS.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Geração Eólica",
                "Geração Térmica",
                "Geração Solar",
                "Geração Hidráulica"
            ]
        );
    }

    // ===== Cost Model Tests =====

    #[test]
    fn test_cost_page_deserialization() {
        let json = r#"{
            "total_registros": 12,
            "data_inicial": "2024-01-01",
            "data_final": "2024-03-08",
            "dados": [
                {
                    "id_subsistema": "SE",
                    "subsistema_nome": "SUDESTE",
                    "data": "2024-01-12",
                    "custo_marginal_operacao_semanal": 78.43,
                    "custo_marginal_operacao_semanal_carga_leve": 61.17,
                    "custo_marginal_operacao_semanal_carga_media": 78.43,
                    "custo_marginal_operacao_semanal_carga_pesada": 95.02
                }
            ]
        }"#;

        let page: Result<CostPage, _> = serde_json::from_str(json);
        assert!(page.is_ok());

        let page = page.unwrap();
        assert_eq!(page.total_registros, 12);
        assert_eq!(page.dados.len(), 1);

        let record = &page.dados[0];
        assert_eq!(record.id_subsistema, "SE");
        assert_eq!(record.data, date("2024-01-12"));
        assert_eq!(record.custo_marginal_operacao_semanal, 78.43);
        assert_eq!(record.custo_marginal_operacao_semanal_carga_pesada, 95.02);
    }

    #[test]
    fn test_cost_metric_labels() {
        let labels: Vec<&str> = CostRecord::METRICS.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec!["Custo Total", "Carga Leve", "Carga Média", "Carga Pesada"]
        );
    }

    // ===== Monthly Aggregation Tests =====

    #[test]
    fn test_monthly_means_groups_by_month() {
        let records = vec![
            create_energy_record("2024-01-05", 10.0),
            create_energy_record("2024-01-20", 20.0),
            create_energy_record("2024-02-03", 5.0),
        ];

        let buckets = monthly_means(&records);
        assert_eq!(buckets.len(), 2);

        assert_eq!(buckets[0].month, "2024-01");
        assert_eq!(buckets[0].means[0], 15.0);
        assert_eq!(buckets[0].means[1], 30.0);
        assert_eq!(buckets[0].means[2], 7.5);
        assert_eq!(buckets[0].means[3], 60.0);

        assert_eq!(buckets[1].month, "2024-02");
        assert_eq!(buckets[1].means[0], 5.0);
    }

    #[test]
    fn test_monthly_means_orders_by_first_appearance() {
        // Months arrive interleaved and out of calendar order
        let records = vec![
            create_energy_record("2024-03-01", 1.0),
            create_energy_record("2024-01-15", 2.0),
            create_energy_record("2024-03-28", 3.0),
            create_energy_record("2024-02-07", 4.0),
        ];

        let buckets = monthly_means(&records);
        let months: Vec<&str> = buckets.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(months, vec!["2024-03", "2024-01", "2024-02"]);
        assert_eq!(buckets[0].means[0], 2.0);
    }

    #[test]
    fn test_monthly_means_empty_input() {
        let buckets = monthly_means::<EnergyRecord>(&[]);
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_monthly_means_missing_value_poisons_month() {
        let mut incomplete = create_energy_record("2024-01-10", 10.0);
        incomplete.geracao_solar = None;

        let records = vec![create_energy_record("2024-01-05", 10.0), incomplete];
        let buckets = monthly_means(&records);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].means[0], 10.0);
        assert!(buckets[0].means[2].is_nan());
    }

    #[test]
    fn test_monthly_means_cost_records() {
        let records = vec![
            create_cost_record("2024-01-05", 100.5),
            create_cost_record("2024-01-19", 120.5),
        ];

        let buckets = monthly_means(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].means[0], 110.5);
        assert_eq!(buckets[0].means[1], 90.5);
        assert_eq!(buckets[0].means[3], 130.5);
    }

    #[test]
    fn test_chart_series_splits_buckets_per_metric() {
        let records = vec![
            create_energy_record("2024-01-05", 10.0),
            create_energy_record("2024-01-20", 20.0),
            create_energy_record("2024-02-03", 5.0),
        ];

        let buckets = monthly_means(&records);
        let series = chart_series::<EnergyRecord>(&buckets);

        assert_eq!(series.len(), 4);
        assert_eq!(series[0].label, "Geração Eólica");
        assert_eq!(series[0].color, "#8884d8");
        assert_eq!(series[0].values, vec![15.0, 5.0]);
        assert_eq!(series[3].values, vec![60.0, 20.0]);
    }

    #[test]
    fn test_month_labels_follow_bucket_order() {
        let records = vec![
            create_energy_record("2024-02-03", 5.0),
            create_energy_record("2024-01-05", 10.0),
        ];

        let buckets = monthly_means(&records);
        assert_eq!(month_labels(&buckets), vec!["2024-02", "2024-01"]);
    }

    // ===== Pagination Tests =====

    #[test]
    fn test_cursor_first_page() {
        let cursor = PageCursor::first(100);
        assert_eq!(cursor.offset, 0);
        assert_eq!(cursor.limit, 100);
        assert_eq!(cursor.page_number(), 1);
        assert!(!cursor.has_previous());
    }

    #[test]
    fn test_cursor_advance_moves_one_page() {
        let cursor = PageCursor::first(100).advance(250);
        assert_eq!(cursor.offset, 100);
        assert_eq!(cursor.page_number(), 2);

        let cursor = cursor.advance(250);
        assert_eq!(cursor.offset, 200);
        assert_eq!(cursor.page_number(), 3);
    }

    #[test]
    fn test_cursor_advance_stops_on_last_page() {
        let cursor = PageCursor {
            offset: 200,
            limit: 100,
        };
        assert!(!cursor.has_next(250));
        assert_eq!(cursor.advance(250), cursor);
    }

    #[test]
    fn test_cursor_advance_stops_at_exact_boundary() {
        let cursor = PageCursor {
            offset: 100,
            limit: 100,
        };
        assert!(!cursor.has_next(200));
        assert_eq!(cursor.advance(200), cursor);
    }

    #[test]
    fn test_cursor_retreat_floors_at_first_page() {
        let cursor = PageCursor::first(100);
        assert_eq!(cursor.retreat(), cursor);

        // Offset below one page still lands on the first page
        let cursor = PageCursor {
            offset: 40,
            limit: 100,
        };
        assert_eq!(cursor.retreat().offset, 0);
    }

    #[test]
    fn test_cursor_has_next_with_empty_results() {
        assert!(!PageCursor::first(100).has_next(0));
    }

    #[test]
    fn test_cursor_page_number_with_zero_limit() {
        let cursor = PageCursor { offset: 0, limit: 0 };
        assert_eq!(cursor.page_number(), 1);
    }

    // ===== Query Model Tests =====

    #[test]
    fn test_date_range_query_equality() {
        let query1 = DateRangeQuery {
            data_inicial: date("2024-01-01"),
            data_final: date("2024-03-08"),
            limite: 1000,
        };
        let query2 = query1.clone();
        assert_eq!(query1, query2);

        let query3 = DateRangeQuery {
            limite: 500,
            ..query1.clone()
        };
        assert_ne!(query1, query3);
    }
}
