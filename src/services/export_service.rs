use crate::error::Result;
use crate::models::enums::{EmploymentType, Experience, Schedule};
use crate::models::vacancy::VacancyListRow;
use rust_xlsxwriter::*;

pub struct ExportService;

impl ExportService {
    /// Generate the vacancies XLSX workbook: fixed column order, localized
    /// headers, enum codes expanded to their display labels.
    pub fn generate_vacancies_xlsx(rows: &[VacancyListRow]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Вакансии")?;

        let header_bg = Color::RGB(0x0F172A);
        let border_color = Color::RGB(0xE2E8F0);

        let columns = [
            ("ID", 8.0),
            ("Название", 35.0),
            ("Компания", 30.0),
            ("Индустрия", 20.0),
            ("Город", 16.0),
            ("Адрес", 30.0),
            ("Тип трудоустройства", 22.0),
            ("Опыт работы", 16.0),
            ("График работы", 20.0),
            ("Мин. зарплата", 15.0),
            ("Макс. зарплата", 15.0),
            ("Создана", 18.0),
        ];

        for (i, (_, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }

        let header_format = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(Color::White)
            .set_background_color(header_bg)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        worksheet.set_row_height(0, 28)?;
        for (i, (name, _)) in columns.iter().enumerate() {
            worksheet.write_string_with_format(0, i as u16, *name, &header_format)?;
        }

        for (idx, vacancy) in rows.iter().enumerate() {
            let row = 1 + idx as u32;
            let base_fmt = Format::new()
                .set_font_size(10)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);

            worksheet.write_number_with_format(row, 0, vacancy.id as f64, &center_fmt)?;
            worksheet.write_string_with_format(row, 1, &vacancy.title, &base_fmt)?;
            worksheet.write_string_with_format(row, 2, &vacancy.company_name, &base_fmt)?;
            worksheet.write_string_with_format(row, 3, &vacancy.company_industry, &base_fmt)?;
            worksheet.write_string_with_format(row, 4, &vacancy.city, &base_fmt)?;
            worksheet.write_string_with_format(row, 5, &vacancy.address, &base_fmt)?;

            let employment = vacancy
                .employment_type
                .as_deref()
                .map(EmploymentType::display_label)
                .unwrap_or("");
            worksheet.write_string_with_format(row, 6, employment, &base_fmt)?;

            let experience = vacancy
                .experience
                .as_deref()
                .map(Experience::display_label)
                .unwrap_or("");
            worksheet.write_string_with_format(row, 7, experience, &base_fmt)?;

            let schedule = vacancy
                .schedule
                .as_deref()
                .map(Schedule::display_label)
                .unwrap_or("");
            worksheet.write_string_with_format(row, 8, schedule, &base_fmt)?;

            if let Some(salary_min) = vacancy.salary_min {
                worksheet.write_number_with_format(row, 9, salary_min as f64, &center_fmt)?;
            } else {
                worksheet.write_string_with_format(row, 9, "", &center_fmt)?;
            }
            if let Some(salary_max) = vacancy.salary_max {
                worksheet.write_number_with_format(row, 10, salary_max as f64, &center_fmt)?;
            } else {
                worksheet.write_string_with_format(row, 10, "", &center_fmt)?;
            }

            let created = vacancy.created_at.format("%d.%m.%Y %H:%M").to_string();
            worksheet.write_string_with_format(row, 11, &created, &center_fmt)?;
        }

        // Header stays visible while scrolling.
        worksheet.set_freeze_panes(1, 0)?;
        worksheet.autofilter(0, 0, rows.len() as u32, (columns.len() - 1) as u16)?;

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(id: i64) -> VacancyListRow {
        VacancyListRow {
            id,
            title: "Backend-разработчик".into(),
            description: "Разработка сервисов".into(),
            company_id: 1,
            field_id: None,
            is_active: true,
            salary_min: Some(120_000),
            salary_max: Some(180_000),
            city: "Казань".into(),
            address: "ул. Баумана, 1".into(),
            employment_type: Some("full".into()),
            experience: Some("1-3".into()),
            schedule: Some("hybrid".into()),
            response_type: None,
            response_destination: String::new(),
            requirements: "Rust, SQL".into(),
            responsibilities: "Сервисы".into(),
            conditions: "ДМС".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            company_name: "Иннополис".into(),
            company_industry: "IT".into(),
            field_name: None,
        }
    }

    #[test]
    fn empty_export_is_a_valid_workbook_with_header_only() {
        let buffer = ExportService::generate_vacancies_xlsx(&[]).unwrap();
        // XLSX is a ZIP container.
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn export_with_rows_produces_a_workbook() {
        let rows = vec![row(1), row(2)];
        let buffer = ExportService::generate_vacancies_xlsx(&rows).unwrap();
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn unset_enum_cells_render_blank() {
        let mut r = row(3);
        r.employment_type = None;
        r.schedule = None;
        r.salary_min = None;
        assert!(ExportService::generate_vacancies_xlsx(&[r]).is_ok());
    }
}
