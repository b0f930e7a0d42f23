//! Canonical worked examples embedded in conversion templates, one per
//! target dialect. Purely illustrative; the completion endpoint is told to
//! mirror their structure and style.

pub const POSTGRES_FUNCTION_EXAMPLE: &str = r#"
CREATE OR REPLACE FUNCTION public.sales_summary_brands_by_sales_filters(
    year integer,
    month json,
    store json,
    state json,
    channel json,
    fromdate date,
    todate date)
    RETURNS SETOF refcursor
    LANGUAGE 'plpgsql'
    COST 100
    VOLATILE PARALLEL UNSAFE
    ROWS 1000
AS $BODY$
DECLARE
    query1 refcursor := 'main';
    months integer[];
    stores text[];
    states text[];
    channels text[];
BEGIN
    -- Parse JSON arrays
    IF month IS NULL OR month::jsonb = '["all"]'::jsonb THEN
        months := NULL;
    ELSE
        months := ARRAY(SELECT json_array_elements_text(month)::text);
    END IF;

    IF store IS NULL OR store::jsonb = '["all"]'::jsonb THEN
        stores := NULL;
    ELSE
        stores := ARRAY(SELECT json_array_elements_text(store)::text);
    END IF;

    IF state IS NULL OR state::jsonb = '["all"]'::jsonb THEN
        states := NULL;
    ELSE
        states := ARRAY(SELECT json_array_elements_text(state)::text);
    END IF;

    IF channel IS NULL OR channel::jsonb = '["all"]'::jsonb THEN
        channels := NULL;
    ELSE
        channels := ARRAY(SELECT json_array_elements_text(channel)::text);
    END IF;

    -- Override filters if date range provided
    IF fromdate IS NOT NULL OR todate IS NOT NULL THEN
        year := NULL;
        months := NULL;
    END IF;

    -- Main query
    OPEN query1 FOR
    SELECT
        db.brandname AS y,
        SUM(fs.salesamount) AS x,
        currency_convert(SUM(fs.salesamount)) AS text,
        db.brandid AS id,
        'bar' AS type,
        'h' AS orientation
    FROM factsales fs
    INNER JOIN DimProduct dp ON fs.productid = dp.productid
    INNER JOIN DimBrand db ON db.brandid = dp.brandid
    INNER JOIN dimdate dd ON fs.OrderDate = dd.calendar
    INNER JOIN dimstore ds ON fs.storeid = ds.storeid
    INNER JOIN dimregion dr ON dr.regionid = ds.regionid
    INNER JOIN dimchannel dc ON dc.channelid = fs.channelid
    WHERE (year IS NULL OR dd.financialyear = year)
        AND (months IS NULL OR date_part('MONTH', fs.OrderDate) = ANY(months))
        AND (states IS NULL OR dr.level3value = ANY(states))
        AND (stores IS NULL OR fs.storeid::text = ANY(stores))
        AND (channels IS NULL OR fs.channelid::text = ANY(channels))
        AND (fromdate IS NULL OR fs.OrderDate BETWEEN fromdate AND todate)
    GROUP BY db.brandname, db.brandid
    ORDER BY x ASC;

    RETURN NEXT query1;
END;
$BODY$;
"#;

pub const SQLSERVER_PROCEDURE_EXAMPLE: &str = r#"
CREATE PROCEDURE [dbo].[SALES_SUMMARY_BRANDS_BY_SALES_FILTERS](
    @year INT = NULL,
    @month NVARCHAR(MAX) = NULL,
    @fromdate DATE = NULL,
    @todate DATE = NULL,
    @store NVARCHAR(MAX) = NULL,
    @state NVARCHAR(MAX) = NULL,
    @channel NVARCHAR(MAX) = NULL,
    @date DATE = NULL
)
AS
BEGIN
    SET NOCOUNT ON;

    DECLARE @months NVARCHAR(MAX);
    DECLARE @stores NVARCHAR(MAX);
    DECLARE @states NVARCHAR(MAX);
    DECLARE @channels NVARCHAR(MAX);

    -- Parse JSON-like strings
    SET @months = REPLACE(REPLACE(REPLACE(@month, '"', ''), '[', ''), ']', '');
    IF @months = 'all' SET @months = '0';

    SET @stores = REPLACE(REPLACE(REPLACE(@store, '"', ''''), '[', ''), ']', '');
    IF @stores = '''all''' SET @stores = '0';

    SET @states = REPLACE(REPLACE(REPLACE(@state, '"', ''''), '[', ''), ']', '');
    IF @states = '''all''' SET @states = '0';

    SET @channels = REPLACE(REPLACE(REPLACE(@channel, '"', ''), '[', ''), ']', '');
    IF @channels = 'all' SET @channels = '0';

    -- Override filters if date range provided
    IF @fromdate IS NOT NULL OR @todate IS NOT NULL OR @date IS NOT NULL
    BEGIN
        SET @year = '0';
        SET @months = '0';
    END;

    -- Dynamic SQL construction
    DECLARE @Sql NVARCHAR(MAX) = N'
    SELECT
        db.BrandName AS y,
        SUM(fs.SalesAmount) AS x,
        CASE
            WHEN SUM(fs.SalesAmount) < 99999 THEN ''$'' + FORMAT(SUM(fs.SalesAmount) / 1000, ''N2'') + ''K''
            ELSE FORMAT(SUM(fs.SalesAmount), ''$0,,.00M'')
        END AS text,
        db.BrandId AS id,
        ''bar'' AS type,
        ''h'' AS orientation
    FROM FactSales fs WITH(NOLOCK)
    INNER JOIN DimProduct dp WITH(NOLOCK) ON fs.ProductID = dp.ProductID
    INNER JOIN DimBrand db WITH(NOLOCK) ON db.BrandId = dp.BrandId
    INNER JOIN DimDate dd WITH(NOLOCK) ON dd.Calendar = fs.OrderDate
    INNER JOIN DimStore ds WITH(NOLOCK) ON fs.StoreID = ds.StoreID
    INNER JOIN DimRegion dr WITH(NOLOCK) ON dr.RegionID = ds.RegionID
    INNER JOIN DimChannel dc WITH(NOLOCK) ON dc.ChannelID = fs.ChannelID
    WHERE 1=1';

    -- Add conditional filters
    IF @year IS NOT NULL AND @year != '0'
        SET @Sql = @Sql + N' AND dd.FinancialYear = @year';

    IF @months IS NOT NULL AND @months != '0'
        SET @Sql = @Sql + N' AND MONTH(fs.OrderDate) IN (' + @months + ')';

    IF @fromdate IS NOT NULL AND @todate IS NOT NULL
        SET @Sql = @Sql + N' AND fs.OrderDate BETWEEN @fromdate AND @todate';

    IF @date IS NOT NULL
        SET @Sql = @Sql + N' AND fs.OrderDate = @date';

    IF @states IS NOT NULL AND @states != '''0'''
        SET @Sql = @Sql + N' AND dr.Level3Value IN (' + @states + ')';

    IF @stores IS NOT NULL AND @stores != '''0'''
        SET @Sql = @Sql + N' AND ds.StoreID IN (' + @stores + ')';

    IF @channels IS NOT NULL AND @channels != '0'
        SET @Sql = @Sql + N' AND fs.ChannelID IN (' + @channels + ')';

    SET @Sql = @Sql + N' GROUP BY db.BrandName, db.BrandId ORDER BY x ASC';

    -- Execute dynamic SQL
    DECLARE @params NVARCHAR(MAX) = N'@year INT, @fromdate DATE, @todate DATE, @date DATE';
    EXEC sp_executesql @Sql, @params, @year, @fromdate, @todate, @date;
END
"#;

pub const MYSQL_PROCEDURE_EXAMPLE: &str = r#"
DELIMITER $$
CREATE DEFINER=`mysql_sai_charan`@`%` PROCEDURE `SALES_SUMMARY_SALES_BY_PRODUCT_BEST_RANK_FILTERS`(
IN year int ,
IN month nvarchar(255) ,
IN store nvarchar(4000),
IN state nvarchar(4000),
IN channel nvarchar(4000),
IN product nvarchar(4000),
IN fromdate date ,
IN todate date
)
BEGIN
	DECLARE latestdate date;
    DECLARE maxdate date;
    DECLARE latestmonth date;
	DECLARE length int;
    DECLARE lastyear date;
	DECLARE FinancialYearStart date;

	SET month = REPLACE(REPLACE(REPLACE(REPLACE(month, '"', ''), '[', ''), ']', ''),'''','');
    IF month = 'all' THEN
		SET month = REPLACE(month, 'all', null);
	END IF;

	SET store = REPLACE(REPLACE(REPLACE(store, '"', ''), '[', ''), ']', '');
    IF store = 'all' THEN
		SET store = REPLACE(store, 'all', null);
	END IF;

    SET state = REPLACE(REPLACE(REPLACE(state, '"', ''), '[', ''), ']', '');
    IF state = 'all' THEN
		SET state = REPLACE(state, 'all', null);
	END IF;

    SET channel = REPLACE(REPLACE(REPLACE(channel, '"', ''), '[', ''), ']', '');
    IF channel = 'all' THEN
		SET channel = REPLACE(channel, 'all', null);
	END IF;

	SET product = REPLACE(REPLACE(REPLACE(product, '"', ''), '[', ''), ']', '');
    IF product = 'all' THEN
		SET product = REPLACE(product, 'all', null);
	END IF;


    if fromdate is not null or todate is not null then
			set year = null;
			set month = null;
	end if;

	with cte as
	(
		SELECT dp.ProductID as ProductID,
		DENSE_RANK() OVER (ORDER BY sum(fs.Salesamount) DESC) AS SalesByYear
		FROM FactSales fs
		inner join DimStore ds on fs.StoreID = ds.StoreID
		inner join DimRegion dr on dr.RegionID = ds.RegionID
		inner join DimChannel dc on dc.ChannelID = fs.ChannelID
		inner join DimDate dd on dd.Calendar = fs.OrderDate
		inner join DimProduct dp on dp.ProductID = fs.ProductID
		where (dd.FinancialYear = year OR year IS NULL)
			and (FIND_IN_SET(MONTH(fs.OrderDate), month) OR month IS NULL)
    		and (FIND_IN_SET(ds.StoreID, store) OR store IS NULL)
    		and (FIND_IN_SET(dr.Level3Value, state) OR state IS NULL)
    	and (FIND_IN_SET(fs.ChannelID, channel) OR channel IS NULL)
    	and (fs.OrderDate BETWEEN fromdate AND todate OR fromdate IS NULL OR todate IS NULL)
		GROUP BY dp.ProductID,dp.ProductName
	)
		SELECT SalesByYear as 'Best Ranking Till Date' from cte
		where (FIND_IN_SET(ProductID, product) OR product IS NULL);

END$$
DELIMITER ;
"#;
