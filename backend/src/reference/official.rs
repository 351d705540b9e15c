//! Official per-country regulatory data
//!
//! Government-sourced visa and work-rights figures. Entries here take
//! precedence over the static cost profiles during the merge. The dataset
//! is static reference data: countries without an entry simply resolve
//! from their profile alone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Financial proof required for the student visa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingProof {
    /// Proof method the authorities prefer (e.g. blocked account,
    /// bank statement)
    pub preferred_method: String,
    /// Required amount per year, euros
    pub amount_euro: f64,
    pub details: String,
    /// Government/embassy page the figure was taken from
    pub official_link: String,
}

/// Work rights granted by the student visa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRights {
    pub allowed: bool,
    /// Official phrasing of the hour cap (formats vary per country)
    pub max_hours: String,
    pub notes: String,
}

/// Official regulatory dataset entry for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialCountryData {
    pub country: String,
    pub funding_proof: FundingProof,
    /// Visa application fee, euros
    pub visa_fee_euro: f64,
    pub work_rights: WorkRights,
}

fn entry(
    country: &str,
    preferred_method: &str,
    amount_euro: f64,
    details: &str,
    official_link: &str,
    visa_fee_euro: f64,
    allowed: bool,
    max_hours: &str,
    notes: &str,
) -> OfficialCountryData {
    OfficialCountryData {
        country: country.to_string(),
        funding_proof: FundingProof {
            preferred_method: preferred_method.to_string(),
            amount_euro,
            details: details.to_string(),
            official_link: official_link.to_string(),
        },
        visa_fee_euro,
        work_rights: WorkRights {
            allowed,
            max_hours: max_hours.to_string(),
            notes: notes.to_string(),
        },
    }
}

/// Built-in official dataset, keyed by country name
pub(crate) fn builtin_official_data() -> BTreeMap<String, OfficialCountryData> {
    let entries = vec![
        entry(
            "Germany",
            "Blocked Account (Sperrkonto)",
            11208.0,
            "Must deposit €11,208/yr (~€934/mo) into a blocked account.",
            "https://www.auswaertiges-amt.de/en/visa-service/visabestimmungen-node/sperrkonto-seite",
            75.0,
            true,
            "120 full days / 240 half days per year",
            "Approx 20h/week. Self-employment restricted.",
        ),
        entry(
            "Austria",
            "Bank Statement / Deposit",
            13000.0,
            "Under 24: ~€670/mo. Over 24: ~€1,100/mo. Access to funds required.",
            "https://oead.at/en/to-austria/entry-and-residence",
            160.0,
            true,
            "20 hours per week",
            "Requires a work permit (AMS) from the employer.",
        ),
        entry(
            "Netherlands",
            "University Transfer / Deposit",
            14616.0,
            "University applies for you. Proof of ~€1,218/mo required.",
            "https://ind.nl/en/residence-permits/study/study-at-university-or-higher-professional-education",
            210.0,
            true,
            "16 hours per week",
            "Employer needs work permit (TWV). Internship pay often tax-free.",
        ),
        entry(
            "France",
            "Bank Statement",
            7380.0,
            "Must prove minimum €615/month for the year.",
            "https://france-visas.gouv.fr/en_US/web/france-visas",
            99.0,
            true,
            "964 hours per year",
            "Can work 60% of legal year (~20h/week).",
        ),
        entry(
            "Ireland",
            "Education Bond / Bank Statement",
            10000.0,
            "Access to €10,000 + proof of fees paid.",
            "https://www.irishimmigration.ie/coming-to-study-in-ireland/",
            100.0,
            true,
            "20h/week term-time, 40h/week holidays",
            "Automatic right to work for degree students.",
        ),
        entry(
            "Belgium",
            "Solvency / Financial Proof",
            10000.0,
            "Proof of solvency required. Approx €830/month + fees.",
            "https://dofi.ibz.be/en",
            180.0,
            true,
            "20h/week",
            "Allowed during semester. Unlimited during holidays.",
        ),
        entry(
            "Spain",
            "Bank Statement",
            7200.0,
            "100% of IPREM index (approx €600/mo).",
            "https://www.exteriores.gob.es/Consulados/londres/en/ServiciosConsulares/Paginas/Consular/Visado-de-estudios.aspx",
            80.0,
            true,
            "30 hours per week",
            "Work must not overlap with study hours.",
        ),
        entry(
            "Italy",
            "Bank Statement",
            6500.0,
            "Min €6,500/year (~€540/mo).",
            "https://vistoperitalia.esteri.it/home/en",
            50.0,
            true,
            "20 hours per week",
            "Max 1,040 hours per year.",
        ),
        entry(
            "Poland",
            "Bank Statement / Traveller Cheques",
            8500.0,
            "Cost of living (~776 PLN/mo) + Return ticket + Rent.",
            "https://www.gov.pl/web/diplomacy/visas",
            80.0,
            true,
            "Unlimited",
            "Full-time students with residency permit can work without permit.",
        ),
        entry(
            "Portugal",
            "Bank Statement",
            9840.0,
            "Based on minimum wage (~€820x12).",
            "https://imigrante.sef.pt/en/solicitar/estudar/",
            90.0,
            true,
            "20 hours per week",
            "Need to notify SEF.",
        ),
        entry(
            "Czech Republic",
            "Bank Statement",
            5000.0,
            "Approx 110,000 CZK per year.",
            "https://www.mvcr.cz/mvcren/article/proof-of-funds-for-the-purposes-of-a-long-term-residence.aspx",
            100.0,
            true,
            "Unlimited",
            "If enrolled in accredited university program.",
        ),
        entry(
            "Hungary",
            "Bank Statement",
            3000.0,
            "Must show access to funds for duration. ~€250/mo minimum.",
            "http://www.bmbah.hu/index.php?lang=en",
            60.0,
            true,
            "24 hours per week",
            "30h/week (term time), 66 days/yr outside term.",
        ),
        entry(
            "Sweden",
            "Bank Statement (Deposit)",
            10000.0,
            "Must show ~9,450 SEK/month for duration.",
            "https://www.migrationsverket.se/English/Private-individuals/Studying-in-Sweden.html",
            140.0,
            true,
            "Unlimited",
            "As long as studies are the main focus.",
        ),
        entry(
            "Finland",
            "Bank Statement (Deposit)",
            6720.0,
            "€560 per month for the year.",
            "https://migri.fi/en/studying-in-finland",
            350.0,
            true,
            "30 hours per week",
            "Increased from 25h to 30h recently.",
        ),
        entry(
            "Norway",
            "Deposit in Norwegian Bank",
            13500.0,
            "Must transfer ~151,690 NOK to a Norwegian account.",
            "https://www.udi.no/en/want-to-apply/studies/",
            540.0,
            true,
            "20 hours per week",
            "Full-time during holidays.",
        ),
        entry(
            "Denmark",
            "Bank Statement",
            11000.0,
            "Equivalent of ~€900/month.",
            "https://www.nyidanmark.dk/en-GB",
            255.0,
            true,
            "20 hours per week",
            "Full-time during June, July, August.",
        ),
        entry(
            "Switzerland",
            "Bank Statement (Swiss Bank)",
            22000.0,
            "CHF 21,000 at start of year.",
            "https://www.ch.ch/en/foreign-nationals-in-switzerland/entry-and-stay/visa-procedure-entry/",
            80.0,
            true,
            "15 hours per week",
            "Only after 6 months for non-EU students.",
        ),
        entry(
            "United Kingdom",
            "Bank Statement",
            12000.0,
            "Min £1,023/mo (outside London) or £1,334/mo (London) for 9 months.",
            "https://www.gov.uk/student-visa/money",
            575.0,
            true,
            "20 hours per week",
            "Term-time. Full-time during vacations.",
        ),
    ];

    entries
        .into_iter()
        .map(|data| (data.country.clone(), data))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_is_keyed_by_country() {
        let data = builtin_official_data();
        assert_eq!(data.len(), 18);
        for (key, entry) in &data {
            assert_eq!(key, &entry.country);
        }
    }

    #[test]
    fn test_germany_entry_values() {
        let data = builtin_official_data();
        let germany = &data["Germany"];
        assert_eq!(germany.funding_proof.amount_euro, 11208.0);
        assert_eq!(germany.visa_fee_euro, 75.0);
        assert!(germany.work_rights.allowed);
    }
}
