//! MARCXML wire format: envelope parsing and bibliographic field extraction.

use serde::Deserialize;

use crate::error::HarvestError;
use crate::formats::{
    ListIdentifiers, OaiError, OaiRecord, OaiResponse, RecordHeader, RequestEcho, ResumptionToken,
};
use crate::models::{BibliographicMetadata, MetadataFormat, RecordMetadata};

/// Parsed OAI-PMH envelope carrying MARCXML records
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarcXmlResponse {
    #[serde(rename = "responseDate", default)]
    pub response_date: String,
    #[serde(rename = "request", default)]
    pub request: RequestEcho,
    #[serde(rename = "ListRecords")]
    pub list_records: Option<MarcListRecords>,
    #[serde(rename = "GetRecord")]
    pub get_record: Option<MarcGetRecord>,
    #[serde(rename = "ListIdentifiers")]
    pub list_identifiers: Option<ListIdentifiers>,
    #[serde(rename = "error")]
    pub error: Option<OaiError>,
}

/// Record list from the ListRecords verb
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarcListRecords {
    #[serde(rename = "record", default)]
    pub records: Vec<MarcEnvelopeRecord>,
    #[serde(rename = "resumptionToken")]
    pub resumption_token: Option<ResumptionToken>,
}

/// Single record from the GetRecord verb
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarcGetRecord {
    #[serde(rename = "record", default)]
    pub record: MarcEnvelopeRecord,
}

/// Envelope record: header plus optional MARCXML payload.
///
/// Deleted records carry a header but no payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarcEnvelopeRecord {
    #[serde(default)]
    pub header: RecordHeader,
    #[serde(default)]
    pub metadata: MarcMetadata,
}

/// Metadata wrapper around the MARC record element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarcMetadata {
    #[serde(rename = "record", alias = "marc:record", default)]
    pub record: Option<MarcRecord>,
}

/// A MARC bibliographic record: leader, control fields, data fields.
///
/// Repeated tags and repeated subfield codes are legal and meaningful;
/// everything is kept in document order, never deduplicated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarcRecord {
    #[serde(rename = "leader", alias = "marc:leader", default)]
    pub leader: String,
    #[serde(rename = "controlfield", alias = "marc:controlfield", default)]
    pub control_fields: Vec<ControlField>,
    #[serde(rename = "datafield", alias = "marc:datafield", default)]
    pub data_fields: Vec<DataField>,
}

/// Control field: tag below "010", raw value, no subfield structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControlField {
    #[serde(rename = "@tag")]
    pub tag: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Data field: tag "010" and above, two indicators, ordered subfields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataField {
    #[serde(rename = "@tag")]
    pub tag: String,
    #[serde(rename = "@ind1", default)]
    pub ind1: String,
    #[serde(rename = "@ind2", default)]
    pub ind2: String,
    #[serde(rename = "subfield", alias = "marc:subfield", default)]
    pub subfields: Vec<Subfield>,
}

/// Subfield: single-character code plus value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subfield {
    #[serde(rename = "@code")]
    pub code: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl MarcRecord {
    /// First subfield value for `tag`/`code` across all field
    /// occurrences, in document order. Empty string when absent.
    pub fn first_value(&self, tag: &str, code: &str) -> &str {
        self.data_fields
            .iter()
            .filter(|field| field.tag == tag)
            .flat_map(|field| field.subfields.iter())
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
            .unwrap_or("")
    }

    /// Every matching subfield value across all occurrences, document
    /// order, duplicates included.
    pub fn all_values(&self, tag: &str, code: &str) -> Vec<&str> {
        self.data_fields
            .iter()
            .filter(|field| field.tag == tag)
            .flat_map(|field| field.subfields.iter())
            .filter(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
            .collect()
    }

    /// First control field value for `tag`. Empty string when absent.
    pub fn control_value(&self, tag: &str) -> &str {
        self.control_fields
            .iter()
            .find(|field| field.tag == tag)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    /// Every data field occurrence for `tag`, document order.
    pub fn fields(&self, tag: &str) -> Vec<&DataField> {
        self.data_fields
            .iter()
            .filter(|field| field.tag == tag)
            .collect()
    }

    /// Join non-empty subfield values of the first `tag` occurrence,
    /// space-separated, keeping at most `cap` values when given.
    fn joined_subfields(&self, tag: &str, cap: Option<usize>) -> String {
        let Some(field) = self.data_fields.iter().find(|f| f.tag == tag) else {
            return String::new();
        };

        let values: Vec<&str> = field
            .subfields
            .iter()
            .map(|sf| sf.value.as_str())
            .filter(|v| !v.is_empty())
            .collect();

        let taken = match cap {
            Some(n) => &values[..values.len().min(n)],
            None => &values[..],
        };

        taken.join(" ")
    }

    /// Project this record into bibliographic metadata.
    ///
    /// Absent source fields yield empty strings or vectors, never an
    /// error. Call numbers (090) join only the first two subfields of the
    /// first occurrence; physical descriptions (300) join all of them.
    pub fn extract_bibliographic(&self) -> BibliographicMetadata {
        let mut holdings = owned(self.all_values("990", "a"));
        holdings.extend(owned(self.all_values("999", "a")));

        BibliographicMetadata {
            record_id: self.control_value("001").to_string(),
            last_modified: self.control_value("005").to_string(),
            isbn: self.first_value("020", "a").to_string(),
            classification: self.first_value("082", "a").to_string(),
            call_number: self.joined_subfields("090", Some(2)),
            main_author: self.first_value("100", "a").to_string(),
            corporate_author: self.first_value("110", "a").to_string(),
            meeting_name: self.first_value("111", "a").to_string(),
            title: self.first_value("245", "a").to_string(),
            subtitle: self.first_value("245", "b").to_string(),
            responsibility: self.first_value("245", "c").to_string(),
            edition: self.first_value("250", "a").to_string(),
            publish_place: self.first_value("260", "a").to_string(),
            publisher: self.first_value("260", "b").to_string(),
            publish_year: self.first_value("260", "c").to_string(),
            physical_desc: self.joined_subfields("300", None),
            notes: owned(self.all_values("500", "a")),
            bibliography: self.first_value("504", "a").to_string(),
            subjects: owned(self.all_values("650", "a")),
            authors: owned(self.all_values("700", "a")),
            holdings,
            url: self.first_value("856", "u").to_string(),
        }
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

impl MarcXmlResponse {
    /// Parse an OAI-PMH MARCXML response body
    pub fn from_xml(body: &[u8]) -> Result<Self, HarvestError> {
        let text = std::str::from_utf8(body)
            .map_err(|e| HarvestError::Parse(format!("response body is not valid UTF-8: {}", e)))?;
        Ok(quick_xml::de::from_str(text)?)
    }

    /// Bibliographic projections of every record on this page
    pub fn extract_all(&self) -> Vec<BibliographicMetadata> {
        self.marc_records()
            .into_iter()
            .map(MarcRecord::extract_bibliographic)
            .collect()
    }

    /// MARC payloads in document order; deleted/payload-less records are
    /// skipped, and an errored page yields nothing.
    fn marc_records(&self) -> Vec<&MarcRecord> {
        if self.error.is_some() {
            return Vec::new();
        }

        let mut records = Vec::new();
        if let Some(list) = &self.list_records {
            records.extend(
                list.records
                    .iter()
                    .filter_map(|record| record.metadata.record.as_ref()),
            );
        }
        if let Some(single) = &self.get_record {
            if let Some(record) = single.record.metadata.record.as_ref() {
                records.push(record);
            }
        }
        records
    }
}

impl OaiResponse for MarcXmlResponse {
    fn records(&self) -> Vec<&dyn OaiRecord> {
        self.marc_records()
            .into_iter()
            .map(|record| record as &dyn OaiRecord)
            .collect()
    }

    fn resumption_token(&self) -> Option<&str> {
        self.list_records
            .as_ref()
            .and_then(|list| list.resumption_token.as_ref())
            .map(|token| token.token.as_str())
            .filter(|token| !token.is_empty())
    }

    fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn error(&self) -> Option<&OaiError> {
        self.error.as_ref()
    }
}

impl OaiRecord for MarcRecord {
    fn extract_metadata(&self) -> RecordMetadata {
        RecordMetadata::Bibliographic(self.extract_bibliographic())
    }

    fn format(&self) -> MetadataFormat {
        MetadataFormat::MarcXml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OAI-PMH xmlns="http://www.openarchives.org/OAI/2.0/">
  <responseDate>2025-10-02T10:05:19Z</responseDate>
  <request verb="ListRecords" metadataPrefix="marcxml">http://opac.example.org/oai</request>
  <ListRecords>
    <record>
      <header>
        <identifier>oai:opac.example.org:14</identifier>
        <datestamp>2017-04-04T15:40:10Z</datestamp>
        <setSpec>books</setSpec>
      </header>
      <metadata>
        <record xmlns="http://www.loc.gov/MARC21/slim">
          <leader>00925nam a2200241 a 4500</leader>
          <controlfield tag="001">YOGYA000000000002408</controlfield>
          <controlfield tag="005">20170404154010.0</controlfield>
          <datafield tag="020" ind1=" " ind2=" ">
            <subfield code="a">979-96914-9-X</subfield>
          </datafield>
          <datafield tag="090" ind1=" " ind2=" ">
            <subfield code="a">378.013</subfield>
            <subfield code="b">PAN</subfield>
            <subfield code="c">c.1</subfield>
          </datafield>
          <datafield tag="245" ind1="0" ind2="0">
            <subfield code="a">PANDUAN cerdas mahasiswa Jogja</subfield>
            <subfield code="c">editor, M. Solikhin, M. Farid</subfield>
          </datafield>
          <datafield tag="260" ind1=" " ind2=" ">
            <subfield code="a">Yogyakarta :</subfield>
            <subfield code="b">Kejora</subfield>
            <subfield code="c">2005</subfield>
          </datafield>
          <datafield tag="300" ind1=" " ind2=" ">
            <subfield code="a">xii, 210 hlm. :</subfield>
            <subfield code="b">ilus. ;</subfield>
            <subfield code="c">21 cm.</subfield>
          </datafield>
          <datafield tag="650" ind1=" " ind2="4">
            <subfield code="a">PENDIDIKAN TINGGI</subfield>
          </datafield>
          <datafield tag="700" ind1="0" ind2=" ">
            <subfield code="a">M. Solikhin</subfield>
          </datafield>
          <datafield tag="700" ind1="0" ind2=" ">
            <subfield code="a">M. Farid</subfield>
          </datafield>
          <datafield tag="856" ind1="4" ind2="0">
            <subfield code="u">http://opac.example.org/detail/14</subfield>
          </datafield>
          <datafield tag="990" ind1=" " ind2=" ">
            <subfield code="a">0001/B/2005</subfield>
          </datafield>
          <datafield tag="990" ind1=" " ind2=" ">
            <subfield code="a">0002/B/2005</subfield>
          </datafield>
          <datafield tag="990" ind1=" " ind2=" ">
            <subfield code="a">0003/B/2005</subfield>
          </datafield>
          <datafield tag="999" ind1=" " ind2=" ">
            <subfield code="a">B-14</subfield>
          </datafield>
        </record>
      </metadata>
    </record>
    <record>
      <header>
        <identifier>oai:opac.example.org:17</identifier>
        <datestamp>2019-11-20T08:12:44Z</datestamp>
      </header>
      <metadata>
        <record xmlns="http://www.loc.gov/MARC21/slim">
          <leader>00412nam a2200145 a 4500</leader>
          <controlfield tag="001">YOGYA-02090000041535</controlfield>
          <datafield tag="245" ind1="0" ind2="0">
            <subfield code="a">Lexicon of library terms</subfield>
          </datafield>
        </record>
      </metadata>
    </record>
  </ListRecords>
</OAI-PMH>"#;

    fn sample() -> MarcXmlResponse {
        MarcXmlResponse::from_xml(SAMPLE_RESPONSE.as_bytes()).unwrap()
    }

    fn first_record(response: &MarcXmlResponse) -> &MarcRecord {
        response.list_records.as_ref().unwrap().records[0]
            .metadata
            .record
            .as_ref()
            .unwrap()
    }

    fn sf(code: &str, value: &str) -> Subfield {
        Subfield {
            code: code.to_string(),
            value: value.to_string(),
        }
    }

    fn field(tag: &str, subfields: Vec<Subfield>) -> DataField {
        DataField {
            tag: tag.to_string(),
            ind1: " ".to_string(),
            ind2: " ".to_string(),
            subfields,
        }
    }

    #[test]
    fn test_parse_envelope() {
        let response = sample();
        assert_eq!(response.response_date, "2025-10-02T10:05:19Z");
        assert_eq!(response.request.verb, "ListRecords");
        assert_eq!(response.request.metadata_prefix, "marcxml");
        assert_eq!(response.request.base_url, "http://opac.example.org/oai");
        assert!(response.error.is_none());

        let list = response.list_records.as_ref().unwrap();
        assert_eq!(list.records.len(), 2);
        assert_eq!(list.records[0].header.identifier, "oai:opac.example.org:14");
        assert_eq!(list.records[0].header.set_spec, vec!["books".to_string()]);
        assert_eq!(list.records[1].header.identifier, "oai:opac.example.org:17");
    }

    #[test]
    fn test_control_and_data_field_queries() {
        let response = sample();
        let record = first_record(&response);

        assert_eq!(record.control_value("001"), "YOGYA000000000002408");
        assert_eq!(record.control_value("005"), "20170404154010.0");
        assert_eq!(record.control_value("009"), "");

        assert_eq!(record.first_value("245", "a"), "PANDUAN cerdas mahasiswa Jogja");
        assert_eq!(record.first_value("260", "b"), "Kejora");
        assert_eq!(record.first_value("260", "c"), "2005");
        assert_eq!(record.first_value("400", "a"), "");
        assert_eq!(record.first_value("245", "z"), "");
    }

    #[test]
    fn test_multi_value_extraction_in_document_order() {
        let response = sample();
        let record = first_record(&response);

        let authors = record.all_values("700", "a");
        assert_eq!(authors, vec!["M. Solikhin", "M. Farid"]);

        let holdings_990 = record.all_values("990", "a");
        assert_eq!(holdings_990.len(), 3);
        assert_eq!(holdings_990[0], "0001/B/2005");
    }

    #[test]
    fn test_field_occurrences_and_indicators() {
        let response = sample();
        let record = first_record(&response);

        assert_eq!(record.fields("990").len(), 3);
        assert_eq!(record.fields("260")[0].subfields.len(), 3);

        let link = &record.fields("856")[0];
        assert_eq!(link.ind1, "4");
        assert_eq!(link.ind2, "0");
    }

    #[test]
    fn test_extract_bibliographic_full_record() {
        let response = sample();
        let meta = first_record(&response).extract_bibliographic();

        assert_eq!(meta.record_id, "YOGYA000000000002408");
        assert_eq!(meta.last_modified, "20170404154010.0");
        assert_eq!(meta.isbn, "979-96914-9-X");
        assert_eq!(meta.title, "PANDUAN cerdas mahasiswa Jogja");
        assert_eq!(meta.responsibility, "editor, M. Solikhin, M. Farid");
        assert_eq!(meta.publisher, "Kejora");
        assert_eq!(meta.publish_year, "2005");
        assert_eq!(meta.subjects, vec!["PENDIDIKAN TINGGI".to_string()]);
        assert_eq!(meta.authors.len(), 2);
        assert_eq!(meta.url, "http://opac.example.org/detail/14");

        // 990 values first, then 999
        assert_eq!(
            meta.holdings,
            vec![
                "0001/B/2005".to_string(),
                "0002/B/2005".to_string(),
                "0003/B/2005".to_string(),
                "B-14".to_string(),
            ]
        );
    }

    #[test]
    fn test_call_number_caps_at_two_subfields() {
        let record = MarcRecord {
            data_fields: vec![field("090", vec![sf("a", "378.013"), sf("b", "PAN"), sf("c", "c.1")])],
            ..Default::default()
        };
        assert_eq!(record.extract_bibliographic().call_number, "378.013 PAN");
    }

    #[test]
    fn test_physical_desc_joins_all_subfields() {
        let record = MarcRecord {
            data_fields: vec![field(
                "300",
                vec![sf("a", "xii, 210 hlm. :"), sf("b", "ilus. ;"), sf("c", "21 cm.")],
            )],
            ..Default::default()
        };
        assert_eq!(
            record.extract_bibliographic().physical_desc,
            "xii, 210 hlm. : ilus. ; 21 cm."
        );
    }

    #[test]
    fn test_joined_subfields_skip_empty_values() {
        let record = MarcRecord {
            data_fields: vec![field("090", vec![sf("a", ""), sf("b", "PAN"), sf("c", "c.1")])],
            ..Default::default()
        };
        // The empty first subfield does not consume a slot
        assert_eq!(record.extract_bibliographic().call_number, "PAN c.1");
    }

    #[test]
    fn test_extract_bibliographic_empty_record() {
        let meta = MarcRecord::default().extract_bibliographic();
        assert_eq!(meta.record_id, "");
        assert_eq!(meta.title, "");
        assert_eq!(meta.call_number, "");
        assert!(meta.notes.is_empty());
        assert!(meta.holdings.is_empty());
    }

    #[test]
    fn test_repeated_subfield_codes_within_one_field() {
        let record = MarcRecord {
            data_fields: vec![field("500", vec![sf("a", "first note"), sf("a", "second note")])],
            ..Default::default()
        };
        assert_eq!(record.all_values("500", "a"), vec!["first note", "second note"]);
        assert_eq!(record.first_value("500", "a"), "first note");
    }

    #[test]
    fn test_response_trait_records_and_token() {
        let response = sample();
        let records = response.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].format(), MetadataFormat::MarcXml);

        match records[1].extract_metadata() {
            RecordMetadata::Bibliographic(meta) => {
                assert_eq!(meta.title, "Lexicon of library terms");
            }
            other => panic!("expected bibliographic metadata, got {:?}", other),
        }

        // No resumptionToken element in the sample
        assert!(response.resumption_token().is_none());
    }

    #[test]
    fn test_resumption_token_with_attributes() {
        let xml = r#"<?xml version="1.0"?>
<OAI-PMH xmlns="http://www.openarchives.org/OAI/2.0/">
  <responseDate>2025-10-02T10:05:19Z</responseDate>
  <request verb="ListRecords">http://opac.example.org/oai</request>
  <ListRecords>
    <record>
      <header><identifier>oai:opac.example.org:1</identifier><datestamp>2020-01-01</datestamp></header>
      <metadata><record><leader>x</leader></record></metadata>
    </record>
    <resumptionToken completeListSize="731" cursor="0">oai/100/marcxml</resumptionToken>
  </ListRecords>
</OAI-PMH>"#;

        let response = MarcXmlResponse::from_xml(xml.as_bytes()).unwrap();
        assert_eq!(response.resumption_token(), Some("oai/100/marcxml"));

        let token = response
            .list_records
            .as_ref()
            .unwrap()
            .resumption_token
            .as_ref()
            .unwrap();
        assert_eq!(token.complete_list_size, Some(731));
        assert_eq!(token.cursor, Some(0));
    }

    #[test]
    fn test_empty_resumption_token_means_final_page() {
        let xml = r#"<?xml version="1.0"?>
<OAI-PMH xmlns="http://www.openarchives.org/OAI/2.0/">
  <responseDate>2025-10-02T10:05:19Z</responseDate>
  <request verb="ListRecords">http://opac.example.org/oai</request>
  <ListRecords>
    <record>
      <header><identifier>oai:opac.example.org:1</identifier><datestamp>2020-01-01</datestamp></header>
      <metadata><record><leader>x</leader></record></metadata>
    </record>
    <resumptionToken completeListSize="1" cursor="0"></resumptionToken>
  </ListRecords>
</OAI-PMH>"#;

        let response = MarcXmlResponse::from_xml(xml.as_bytes()).unwrap();
        assert!(response.resumption_token().is_none());
    }

    #[test]
    fn test_protocol_error_page_has_no_records() {
        let xml = r#"<?xml version="1.0"?>
<OAI-PMH xmlns="http://www.openarchives.org/OAI/2.0/">
  <responseDate>2025-10-02T10:05:19Z</responseDate>
  <request verb="ListRecords">http://opac.example.org/oai</request>
  <error code="noRecordsMatch">The combination of the values of the from, until, set and metadataPrefix arguments results in an empty list.</error>
</OAI-PMH>"#;

        let response = MarcXmlResponse::from_xml(xml.as_bytes()).unwrap();
        assert!(response.has_error());
        assert_eq!(response.error().unwrap().code, "noRecordsMatch");
        assert!(response.records().is_empty());
        assert!(response.extract_all().is_empty());
    }

    #[test]
    fn test_deleted_record_without_payload_is_skipped() {
        let xml = r#"<?xml version="1.0"?>
<OAI-PMH xmlns="http://www.openarchives.org/OAI/2.0/">
  <responseDate>2025-10-02T10:05:19Z</responseDate>
  <request verb="ListRecords">http://opac.example.org/oai</request>
  <ListRecords>
    <record>
      <header status="deleted"><identifier>oai:opac.example.org:9</identifier><datestamp>2021-05-05</datestamp></header>
    </record>
    <record>
      <header><identifier>oai:opac.example.org:10</identifier><datestamp>2021-05-06</datestamp></header>
      <metadata><record><controlfield tag="001">A10</controlfield></record></metadata>
    </record>
  </ListRecords>
</OAI-PMH>"#;

        let response = MarcXmlResponse::from_xml(xml.as_bytes()).unwrap();
        let list = response.list_records.as_ref().unwrap();
        assert_eq!(list.records[0].header.status.as_deref(), Some("deleted"));

        let records = response.records();
        assert_eq!(records.len(), 1);

        let all = response.extract_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].record_id, "A10");
    }

    #[test]
    fn test_list_identifiers_envelope_parses_headers() {
        let xml = r#"<?xml version="1.0"?>
<OAI-PMH xmlns="http://www.openarchives.org/OAI/2.0/">
  <responseDate>2025-10-02T10:05:19Z</responseDate>
  <request verb="ListIdentifiers" metadataPrefix="marcxml">http://opac.example.org/oai</request>
  <ListIdentifiers>
    <header>
      <identifier>oai:opac.example.org:14</identifier>
      <datestamp>2017-04-04T15:40:10Z</datestamp>
      <setSpec>books</setSpec>
    </header>
    <header status="deleted">
      <identifier>oai:opac.example.org:15</identifier>
      <datestamp>2018-01-09T09:00:00Z</datestamp>
    </header>
    <resumptionToken completeListSize="731" cursor="0">oai/100/marcxml</resumptionToken>
  </ListIdentifiers>
</OAI-PMH>"#;

        let response = MarcXmlResponse::from_xml(xml.as_bytes()).unwrap();
        let listing = response.list_identifiers.as_ref().unwrap();
        assert_eq!(listing.headers.len(), 2);
        assert_eq!(listing.headers[0].identifier, "oai:opac.example.org:14");
        assert_eq!(listing.headers[0].set_spec, vec!["books".to_string()]);
        assert_eq!(listing.headers[1].status.as_deref(), Some("deleted"));
        assert_eq!(
            listing.resumption_token.as_ref().unwrap().token,
            "oai/100/marcxml"
        );

        // A headers-only listing carries no record payloads
        assert!(response.records().is_empty());
    }

    #[test]
    fn test_malformed_body_is_a_parse_error() {
        let err = MarcXmlResponse::from_xml(b"this is not xml <<<").unwrap_err();
        assert!(matches!(err, HarvestError::Parse(_)));
    }
}
