// Publication Record

use super::record::{
    EntityDescriptor, KeyKind, KeyPolicy, RecordRow, Resource, ResourceKey, RpcMethods, WireNames,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub static PUBLICATION: EntityDescriptor = EntityDescriptor {
    name: "Publication",
    table: "table_publications",
    key_column: "publication_id",
    key_kind: KeyKind::Text,
    key_policy: KeyPolicy::Generated,
    fields: &[
        "date_published",
        "quartile",
        "authors",
        "department",
        "college",
        "campus",
        "title_of_paper",
        "type_of_publication",
        "funding_source",
        "number_of_citations",
        "google_scholar_details",
        "sdg_no",
        "funding_type",
        "nature_of_fundings",
        "publisher",
        "abstract",
    ],
    methods: RpcMethods {
        create: "publication.create.v1",
        get: "publication.get.v1",
        list: "publication.list.v1",
        update: "publication.update.v1",
        delete: "publication.delete.v1",
    },
    wire: WireNames {
        singular: "publication",
        plural: "publications",
        route: "publications",
    },
};

/// Published research paper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub publication_id: String,
    pub date_published: String,
    pub quartile: String,
    pub authors: String,
    pub department: String,
    pub college: String,
    pub campus: String,
    pub title_of_paper: String,
    pub type_of_publication: String,
    pub funding_source: String,
    pub number_of_citations: String,
    pub google_scholar_details: String,
    pub sdg_no: String,
    pub funding_type: String,
    pub nature_of_fundings: String,
    pub publisher: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Resource for Publication {
    type Key = String;

    fn descriptor() -> &'static EntityDescriptor {
        &PUBLICATION
    }

    fn key(&self) -> &String {
        &self.publication_id
    }

    fn set_key(&mut self, key: String) {
        self.publication_id = key;
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.date_published.as_str(),
            self.quartile.as_str(),
            self.authors.as_str(),
            self.department.as_str(),
            self.college.as_str(),
            self.campus.as_str(),
            self.title_of_paper.as_str(),
            self.type_of_publication.as_str(),
            self.funding_source.as_str(),
            self.number_of_citations.as_str(),
            self.google_scholar_details.as_str(),
            self.sdg_no.as_str(),
            self.funding_type.as_str(),
            self.nature_of_fundings.as_str(),
            self.publisher.as_str(),
            self.abstract_text.as_str(),
        ]
    }

    fn from_row(row: RecordRow) -> Result<Self> {
        let (
            key,
            [date_published, quartile, authors, department, college, campus, title_of_paper, type_of_publication, funding_source, number_of_citations, google_scholar_details, sdg_no, funding_type, nature_of_fundings, publisher, abstract_text],
        ) = row.into_fields::<16>(&PUBLICATION)?;

        Ok(Self {
            publication_id: String::from_record_key(key)?,
            date_published,
            quartile,
            authors,
            department,
            college,
            campus,
            title_of_paper,
            type_of_publication,
            funding_source,
            number_of_citations,
            google_scholar_details,
            sdg_no,
            funding_type,
            nature_of_fundings,
            publisher,
            abstract_text,
        })
    }
}
